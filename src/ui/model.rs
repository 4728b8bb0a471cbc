use crate::models::{CurrentViewer, ProfileBackground, UserProfile};
use crate::playtime::NumberFormatter;

/// True when the signed-in viewer is the profile subject.
pub fn is_me(viewer: Option<&CurrentViewer>, profile: &UserProfile) -> bool {
    viewer.is_some_and(|viewer| viewer.id == profile.id)
}

/// Draft shown inside the edit-profile modal.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    pub display_name: String,
    pub saving: bool,
    pub error: Option<String>,
}

impl EditForm {
    fn new(display_name: &str) -> Self {
        Self {
            display_name: display_name.to_string(),
            saving: false,
            error: None,
        }
    }

    pub fn can_save(&self) -> bool {
        !self.saving && !self.display_name.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditModal {
    #[default]
    Closed,
    Open(EditForm),
}

/// Value recomputed only when its key changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Memo<K, V> {
    key: K,
    value: V,
}

impl<K: PartialEq + Clone, V> Memo<K, V> {
    pub fn new(key: K, compute: impl FnOnce(&K) -> V) -> Self {
        let value = compute(&key);
        Self { key, value }
    }

    /// Recomputes when `key` differs from the stored key. Returns whether it did.
    pub fn refresh(&mut self, key: &K, compute: impl FnOnce(&K) -> V) -> bool {
        if &self.key == key {
            return false;
        }
        self.key = key.clone();
        self.value = compute(key);
        true
    }

    pub fn get(&self) -> &V {
        &self.value
    }
}

/// Background only comes from the session store, which supplies it for the
/// signed-in viewer. Other users' profiles get none.
fn derive_background(supplied: &Option<ProfileBackground>) -> Option<ProfileBackground> {
    *supplied
}

/// Interaction state owned by one profile view instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    edit_modal: EditModal,
    signing_out: bool,
    numbers: Memo<String, NumberFormatter>,
    background: Memo<Option<ProfileBackground>, Option<ProfileBackground>>,
}

impl ViewState {
    pub fn new(language: &str, supplied_background: Option<ProfileBackground>) -> Self {
        Self {
            edit_modal: EditModal::Closed,
            signing_out: false,
            numbers: Memo::new(language.to_string(), |lang| NumberFormatter::new(lang)),
            background: Memo::new(supplied_background, derive_background),
        }
    }

    pub fn edit_modal(&self) -> &EditModal {
        &self.edit_modal
    }

    pub fn is_edit_open(&self) -> bool {
        matches!(self.edit_modal, EditModal::Open(_))
    }

    /// closed -> open. Refused unless the viewer owns the profile.
    pub fn open_edit(&mut self, is_me: bool, display_name: &str) -> bool {
        if !is_me || self.is_edit_open() {
            return false;
        }
        self.edit_modal = EditModal::Open(EditForm::new(display_name));
        true
    }

    /// open -> closed.
    pub fn close_edit(&mut self) {
        self.edit_modal = EditModal::Closed;
    }

    pub fn edit_form_mut(&mut self) -> Option<&mut EditForm> {
        match &mut self.edit_modal {
            EditModal::Open(form) => Some(form),
            EditModal::Closed => None,
        }
    }

    pub fn signing_out(&self) -> bool {
        self.signing_out
    }

    pub fn set_signing_out(&mut self, signing_out: bool) {
        self.signing_out = signing_out;
    }

    pub fn number_formatter(&self) -> &NumberFormatter {
        self.numbers.get()
    }

    pub fn background(&self) -> Option<ProfileBackground> {
        *self.background.get()
    }

    /// Refreshes memoized values whose inputs changed.
    pub fn sync(&mut self, language: &str, supplied_background: Option<ProfileBackground>) {
        if self.numbers.refresh(&language.to_string(), |lang| NumberFormatter::new(lang)) {
            log::debug!("number formatter rebuilt for {}", language);
        }
        self.background.refresh(&supplied_background, derive_background);
    }
}
