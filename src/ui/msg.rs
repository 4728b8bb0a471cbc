use crate::models::GameRef;

#[derive(Debug, Clone)]
pub enum Message {
    /// A game row or library cell was clicked.
    OpenGame(GameRef),
    EditProfile,
    CloseEditModal,
    DisplayNameChanged(String),
    SaveProfile,
    ProfileSaved(Result<(), String>),
    SignOut,
    SignedOut(Result<(), String>),
}
