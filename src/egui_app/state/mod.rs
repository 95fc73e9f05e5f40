use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::egui_app::api::Backend;
use crate::egui_app::effects::{Effects, Stamped};
use crate::egui_app::screens::{
    AccountScreen, BasketScreen, CreateUserScreen, DashboardScreen, DonateScreen, HistoryScreen,
    LoginScreen, NotificationsScreen, PetDetailScreen, PetsScreen,
};
use crate::egui_app::session::Session;
use crate::egui_app::types::AppView;
use crate::shared::config::{AppConfig, ConfigError};
use crate::shared::event::AppEvent;
use crate::shared::models::Pet;

/// Central application state shared across egui views.
///
/// Lives on the UI thread. Views call the action methods below; backend
/// completions come back through [`AppState::drain_events`].
pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub current_view: AppView,

    pub login: LoginScreen,
    pub create_user: CreateUserScreen,
    pub dashboard: DashboardScreen,
    pub pets: PetsScreen,
    pub pet_detail: PetDetailScreen,
    pub basket: BasketScreen,
    pub history: HistoryScreen,
    pub donate: DonateScreen,
    pub notifications: NotificationsScreen,
    pub account: AccountScreen,

    effects: Effects,
    events: UnboundedReceiver<Stamped>,
}

impl AppState {
    /// Build the state and start the dashboard search on `runtime`
    pub fn new(config: AppConfig, runtime: Handle) -> Result<Self, ConfigError> {
        config.validate()?;
        let backend = Backend::new(&config)?;
        let (effects, events) = Effects::new(runtime, backend);

        let mut dashboard = DashboardScreen::new();
        dashboard.start(&effects, config.search_debounce());
        tracing::info!("[APP] AppState initialized against {}", config.api_url);

        Ok(Self {
            config,
            session: Session::new(),
            current_view: AppView::Login,
            login: LoginScreen::new(),
            create_user: CreateUserScreen::new(),
            dashboard,
            pets: PetsScreen::new(),
            pet_detail: PetDetailScreen::new(),
            basket: BasketScreen::new(),
            history: HistoryScreen::new(),
            donate: DonateScreen::new(),
            notifications: NotificationsScreen::new(),
            account: AccountScreen::new(),
            effects,
            events,
        })
    }

    pub fn effects(&self) -> &Effects {
        &self.effects
    }

    /// Apply every completed background result. Called once per frame.
    /// Returns `true` when anything changed.
    pub fn drain_events(&mut self) -> bool {
        let mut changed = false;
        while let Ok(stamped) = self.events.try_recv() {
            self.accept(stamped);
            changed = true;
        }
        self.dashboard.poll() || changed
    }

    /// Wait for the next background result and apply it. Stale results are
    /// still returned, but nothing is changed by them.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        let stamped = self.events.recv().await?;
        let event = stamped.event.clone();
        self.accept(stamped);
        Some(event)
    }

    /// Apply `stamped` only if it was requested in the current login epoch
    fn accept(&mut self, stamped: Stamped) {
        let current = self.effects.epoch();
        if stamped.epoch != current {
            tracing::debug!(
                "[APP] dropping {} from login epoch {} (now {})",
                stamped.event.kind(),
                stamped.epoch,
                current
            );
            return;
        }
        self.handle(stamped.event);
    }

    /// Route a completion to the screen that asked for it
    pub fn handle(&mut self, event: AppEvent) {
        let pre_login = matches!(event, AppEvent::LoginChecked { .. } | AppEvent::UserCreated(_));
        if !pre_login && !self.session.is_logged_in() {
            tracing::debug!("[APP] dropping {} after logout", event.kind());
            return;
        }

        match event {
            AppEvent::LoginChecked { user } => {
                if let Some(next) = self.login.on_checked(&mut self.session, user) {
                    self.effects.advance_epoch();
                    self.navigate(next);
                    self.basket.load(&self.effects, self.session.current_user());
                }
            }
            AppEvent::UserCreated(user) => {
                if let Some(next) = self.create_user.on_created(user) {
                    self.navigate(next);
                    self.login.message = "Account created, please log in".to_string();
                }
            }
            AppEvent::PetsLoaded(pets) => self.pets.on_loaded(pets),
            AppEvent::PetAdded(pet) => self.pets.on_added(pet),
            AppEvent::BasketAddResult { requested, stored } => {
                self.pets.on_basket_result(&requested, stored)
            }
            AppEvent::PetLoaded(pet) => self.pet_detail.on_loaded(pet),
            AppEvent::AdoptersLoaded(users) => self.pet_detail.on_adopters(users),
            AppEvent::PetSaved(ok) => {
                if let Some(next) = self.pet_detail.on_saved(ok) {
                    self.navigate(next);
                }
            }
            AppEvent::BasketLoaded(pets) => self.basket.on_loaded(pets),
            AppEvent::AdoptionFinished { adopted, failed } => {
                self.basket.on_adoption_finished(adopted, failed)
            }
            AppEvent::HistoryLoaded(pets) => self.history.on_loaded(pets),
            AppEvent::NotificationsLoaded(items) => self.notifications.on_loaded(items),
        }
    }

    /// Switch screens, loading whatever the target shows. Anything but the
    /// login and account creation forms requires a logged-in user.
    pub fn navigate(&mut self, view: AppView) {
        let view = if view.is_public() || self.session.is_logged_in() {
            view
        } else {
            tracing::debug!("[APP] {} requires login", view.title());
            AppView::Login
        };
        self.current_view = view;

        let user = self.session.current_user();
        match view {
            AppView::Pets => self.pets.load(&self.effects),
            AppView::PetDetail(id) => self.pet_detail.load(&self.effects, &self.session, id),
            AppView::Basket => self.basket.load(&self.effects, user),
            AppView::History => self.history.load(&self.effects, user),
            AppView::Notifications => self.notifications.load(&self.effects, user),
            AppView::Donate => {
                self.donate.message.clear();
                self.donate.donated = false;
            }
            _ => {}
        }
    }

    pub fn logout(&mut self) {
        let next = self.account.logout(&mut self.session);
        self.effects.advance_epoch();
        self.login = LoginScreen::new();
        self.create_user = CreateUserScreen::new();
        self.pets = PetsScreen::new();
        self.pet_detail = PetDetailScreen::new();
        self.basket = BasketScreen::new();
        self.history = HistoryScreen::new();
        self.donate = DonateScreen::new();
        self.notifications = NotificationsScreen::new();
        self.dashboard.reset();
        self.navigate(next);
    }

    // Actions invoked by the views

    pub fn submit_login(&mut self) {
        self.login.submit_form(&self.effects);
    }

    pub fn submit_create_user(&mut self) {
        self.create_user.submit_form(&self.effects);
    }

    pub fn search_changed(&mut self) {
        self.dashboard.on_input_changed();
    }

    pub fn toggle_search_mode(&mut self) {
        let mode = self.dashboard.toggle_mode();
        tracing::debug!("[SEARCH] mode switched to {}", mode.label());
    }

    pub fn add_pet(&mut self) {
        self.pets.add_form(&self.effects, &self.session);
    }

    pub fn delete_pet(&mut self, id: i32) {
        self.pets.delete(&self.effects, &self.session, id);
    }

    pub fn add_to_basket(&mut self, pet: &Pet) {
        self.pets.add_to_basket(&self.effects, pet);
    }

    pub fn save_pet(&mut self) {
        self.pet_detail.save(&self.effects, &self.session);
    }

    pub fn remove_from_basket(&mut self, pet: &Pet) {
        self.basket.remove(&self.effects, pet);
    }

    pub fn adopt(&mut self) {
        self.basket.adopt(&self.effects);
    }

    pub fn donate(&mut self) {
        self.donate.submit_form(&self.effects, &self.session);
    }

    pub fn delete_notification(&mut self, text: &str) {
        self.notifications.delete(&self.effects, &self.session, text);
    }
}
