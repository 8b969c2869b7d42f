use crate::surface::FormSurface;

/// Disables the trigger control for as long as it lives.
///
/// Dropping the guard re-enables the control, so early returns, `?` and
/// unwinding all restore it.
#[must_use = "the trigger is re-enabled as soon as the guard is dropped"]
pub struct TriggerGuard<'a, F: FormSurface> {
    form: &'a F,
}

impl<'a, F: FormSurface> TriggerGuard<'a, F> {
    pub fn acquire(form: &'a F) -> Self {
        form.set_trigger_enabled(false);
        Self { form }
    }
}

impl<F: FormSurface> Drop for TriggerGuard<'_, F> {
    fn drop(&mut self) {
        self.form.set_trigger_enabled(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::headless::HeadlessForm;

    #[test]
    fn released_on_drop() {
        let form = HeadlessForm::new("alloy", "mp3");
        {
            let _guard = TriggerGuard::acquire(&form);
            assert!(!form.trigger_enabled());
        }
        assert!(form.trigger_enabled());
        assert_eq!(form.trigger_history(), vec![false, true]);
    }

    #[test]
    fn released_on_unwind() {
        let form = HeadlessForm::new("alloy", "mp3");
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _guard = TriggerGuard::acquire(&form);
            panic!("render failed");
        }));
        assert!(result.is_err());
        assert!(form.trigger_enabled());
    }
}
