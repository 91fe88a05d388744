use crate::validate::InputType;

/// Opaque handle handed out at registration; stable for the registry's life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(usize);

impl ControlId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlKind {
    Input(InputType),
    Button,
    /// Focusable but not followed by the head.
    Other,
}

impl ControlKind {
    pub fn is_trackable(self) -> bool {
        matches!(self, Self::Input(_) | Self::Button)
    }

    pub fn has_checkmark(self) -> bool {
        matches!(self, Self::Input(input_type) if input_type != InputType::Checkbox)
    }

    pub fn input_type(self) -> Option<InputType> {
        match self {
            Self::Input(input_type) => Some(input_type),
            Self::Button | Self::Other => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ControlRegistry {
    kinds: Vec<ControlKind>,
}

impl ControlRegistry {
    pub fn register(&mut self, kind: ControlKind) -> ControlId {
        self.kinds.push(kind);
        ControlId(self.kinds.len() - 1)
    }

    pub fn kind(&self, control: ControlId) -> Option<ControlKind> {
        self.kinds.get(control.0).copied()
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
