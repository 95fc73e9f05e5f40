/**
 * Completion Events
 *
 * Backend work runs off the UI thread. When a request finishes, its outcome
 * comes back to the UI as one of these events and is applied to the screen
 * that asked for it. Failures have already been replaced by fallbacks, so
 * every payload is plain data.
 */
use crate::shared::models::{Pet, User};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Authentication answer for a login attempt
    LoginChecked { user: Option<User> },
    /// Account creation answer
    UserCreated(Option<User>),

    /// Full pet list
    PetsLoaded(Vec<Pet>),
    /// Result of adding a pet to the pool
    PetAdded(Option<Pet>),
    /// Result of putting a pet into the basket
    BasketAddResult { requested: Pet, stored: Option<Pet> },

    /// Single pet for the detail screen
    PetLoaded(Option<Pet>),
    /// Adopters of the pet on the detail screen
    AdoptersLoaded(Vec<User>),
    /// Outcome of saving edits on the detail screen
    PetSaved(bool),

    /// Current user's basket
    BasketLoaded(Vec<Pet>),
    /// Finalized adoptions; `failed` pets are still in the basket
    AdoptionFinished { adopted: Vec<Pet>, failed: Vec<Pet> },

    /// Current user's adoption history
    HistoryLoaded(Vec<Pet>),

    /// Current user's notifications
    NotificationsLoaded(Vec<String>),
}

impl AppEvent {
    /// Short name used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            AppEvent::LoginChecked { .. } => "login_checked",
            AppEvent::UserCreated(_) => "user_created",
            AppEvent::PetsLoaded(_) => "pets_loaded",
            AppEvent::PetAdded(_) => "pet_added",
            AppEvent::BasketAddResult { .. } => "basket_add_result",
            AppEvent::PetLoaded(_) => "pet_loaded",
            AppEvent::AdoptersLoaded(_) => "adopters_loaded",
            AppEvent::PetSaved(_) => "pet_saved",
            AppEvent::BasketLoaded(_) => "basket_loaded",
            AppEvent::AdoptionFinished { .. } => "adoption_finished",
            AppEvent::HistoryLoaded(_) => "history_loaded",
            AppEvent::NotificationsLoaded(_) => "notifications_loaded",
        }
    }
}
