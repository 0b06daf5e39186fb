/// Actions that can be performed in the dialog and the picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    MoveUp,
    MoveDown,
    Select,

    // Row choices
    ChooseCurrent,
    ChooseStandard,
    ChooseCustom,
    ChooseLastCustom,
    TogglePrefs,

    // Picker adjustments
    Increase,
    Decrease,
    IncreaseMore,
    DecreaseMore,
    EnterHexInput,

    // Closing
    Accept,
    Cancel,
    ForceQuit,

    // Input
    InsertChar(char),
    DeleteChar,
}

impl Action {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MoveUp" => Some(Action::MoveUp),
            "MoveDown" => Some(Action::MoveDown),
            "Select" => Some(Action::Select),
            "ChooseCurrent" => Some(Action::ChooseCurrent),
            "ChooseStandard" => Some(Action::ChooseStandard),
            "ChooseCustom" => Some(Action::ChooseCustom),
            "ChooseLastCustom" => Some(Action::ChooseLastCustom),
            "TogglePrefs" => Some(Action::TogglePrefs),
            "Increase" => Some(Action::Increase),
            "Decrease" => Some(Action::Decrease),
            "IncreaseMore" => Some(Action::IncreaseMore),
            "DecreaseMore" => Some(Action::DecreaseMore),
            "EnterHexInput" => Some(Action::EnterHexInput),
            "Accept" => Some(Action::Accept),
            "Cancel" => Some(Action::Cancel),
            "ForceQuit" => Some(Action::ForceQuit),
            "DeleteChar" => Some(Action::DeleteChar),
            "None" | "ReceiveChar" => None, // Special actions to disable bindings
            _ => None,
        }
    }
}
