/// Where a destructive action stands: `Closed -> Open -> Confirming`, then
/// `Closed` on success or `Open` again on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmationDialog<T> {
    Closed,
    Open { target: T, error: Option<String> },
    Confirming { target: T },
}

impl<T> Default for ConfirmationDialog<T> {
    fn default() -> Self {
        Self::Closed
    }
}

impl<T: Clone> ConfirmationDialog<T> {
    pub fn open(&mut self, target: T) {
        *self = Self::Open { target, error: None };
    }

    /// Ignored while confirming.
    pub fn cancel(&mut self) {
        if let Self::Open { .. } = self {
            *self = Self::Closed;
        }
    }

    pub fn target(&self) -> Option<&T> {
        match self {
            Self::Closed => None,
            Self::Open { target, .. } | Self::Confirming { target } => Some(target),
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Open { error, .. } => error.as_deref(),
            _ => None,
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn is_confirm_enabled(&self) -> bool {
        matches!(self, Self::Open { .. })
    }

    /// Returns the target to act on, or `None` if there is nothing to confirm.
    pub fn begin_confirm(&mut self) -> Option<T> {
        let Self::Open { target, .. } = self else {
            return None;
        };
        let target = target.clone();
        *self = Self::Confirming {
            target: target.clone(),
        };
        Some(target)
    }

    pub fn settle<R, E: std::fmt::Display>(&mut self, result: &Result<R, E>) {
        let Self::Confirming { target } = self else {
            return;
        };
        *self = match result {
            Ok(_) => Self::Closed,
            Err(e) => Self::Open {
                target: target.clone(),
                error: Some(e.to_string()),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confirm_cycle() {
        let mut dialog = ConfirmationDialog::default();
        assert!(dialog.begin_confirm().is_none());

        dialog.open("p1");
        assert!(dialog.is_confirm_enabled());
        assert_eq!(dialog.begin_confirm(), Some("p1"));
        assert!(!dialog.is_confirm_enabled());
        dialog.cancel();
        assert!(dialog.is_open());

        dialog.settle::<(), _>(&Err("nope"));
        assert_eq!(dialog.target(), Some(&"p1"));
        assert_eq!(dialog.error(), Some("nope"));
        assert!(dialog.is_confirm_enabled());

        dialog.begin_confirm();
        dialog.settle::<_, String>(&Ok(()));
        assert_eq!(dialog, ConfirmationDialog::Closed);
    }
}
