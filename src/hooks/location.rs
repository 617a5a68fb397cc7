use leptos::*;
use regex::Regex;

/// Error shown for any input that fails zipcode validation.
pub const ZIPCODE_ERROR: &str = "Please enter a valid 5-digit US zipcode";

/// Checks for a 5-digit US zipcode, with an optional ZIP+4 suffix.
pub fn validate_zipcode(input: &str) -> bool {
    Regex::new(r"^\d{5}(-\d{4})?$")
        .map(|re| re.is_match(input))
        .unwrap_or(false)
}

/// The zipcode the user trades around, with validation state. Not
/// persisted; every session starts without a location.
#[derive(Clone, Copy)]
pub struct LocationState {
    zipcode: RwSignal<Option<String>>,
    error: RwSignal<Option<String>>,
    loading: RwSignal<bool>,
}

impl LocationState {
    pub fn zipcode(&self) -> Option<String> {
        self.zipcode.get()
    }

    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    /// Reserved for a future device-location lookup; nothing sets it yet.
    pub fn loading(&self) -> bool {
        self.loading.get()
    }

    pub fn has_location(&self) -> bool {
        self.zipcode.with(|z| z.is_some())
    }

    /// Takes the raw input value. Whitespace is trimmed first; an empty
    /// input clears both the zipcode and the error, a valid one is stored,
    /// an invalid one sets the error and leaves the stored zipcode as is.
    pub fn set_zipcode(&self, input: &str) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            self.zipcode.set(None);
            self.error.set(None);
        } else if validate_zipcode(trimmed) {
            self.zipcode.set(Some(trimmed.to_string()));
            self.error.set(None);
        } else {
            self.error.set(Some(ZIPCODE_ERROR.to_string()));
        }
    }

    pub fn clear(&self) {
        self.zipcode.set(None);
        self.error.set(None);
    }
}

pub fn use_location() -> LocationState {
    LocationState {
        zipcode: create_rw_signal(None),
        error: create_rw_signal(None),
        loading: create_rw_signal(false),
    }
}
