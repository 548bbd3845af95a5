use serde::{Deserialize, Serialize};

use crate::models::Recipe;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Member,
    Marketer,
    Merchant,
    Admin,
    Territory,
    Leader,
    Runner,
}

impl UserRole {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "member" => Some(UserRole::Member),
            "marketer" => Some(UserRole::Marketer),
            "merchant" => Some(UserRole::Merchant),
            "admin" => Some(UserRole::Admin),
            "territory" => Some(UserRole::Territory),
            "leader" => Some(UserRole::Leader),
            "runner" => Some(UserRole::Runner),
            _ => None,
        }
    }

    /// Where a freshly signed-in user lands.
    pub fn landing_view(&self) -> View {
        match self {
            UserRole::Merchant => View::Merchant,
            UserRole::Marketer => View::Marketer,
            UserRole::Runner => View::Runner,
            UserRole::Admin => View::Admin,
            UserRole::Territory => View::Territory,
            // members start at the finder to buy food
            UserRole::Member | UserRole::Leader => View::Finder,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Finder,
    Member,
    Merchant,
    Marketer,
    Runner,
    Admin,
    Territory,
    Watcher,
}

impl View {
    pub const ALL: [View; 8] = [
        View::Finder,
        View::Member,
        View::Merchant,
        View::Marketer,
        View::Runner,
        View::Admin,
        View::Territory,
        View::Watcher,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            View::Finder => "Recipe Finder",
            View::Member => "Member",
            View::Merchant => "Merchant",
            View::Marketer => "Marketer",
            View::Runner => "Runner",
            View::Admin => "Admin",
            View::Territory => "Territory",
            View::Watcher => "Watcher",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub email: String,
    pub role: UserRole,
}

/// Who is signed in, what they are looking at, and the last recipe found.
#[derive(Debug, Clone, Default)]
pub struct Session {
    user: Option<User>,
    view: Option<View>,
    recipe: Option<Recipe>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// `None` means the sign-in screen.
    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn recipe(&self) -> Option<&Recipe> {
        self.recipe.as_ref()
    }

    pub fn set_recipe(&mut self, recipe: Option<Recipe>) {
        self.recipe = recipe;
    }

    pub fn login(&mut self, user: User) -> View {
        let view = user.role.landing_view();
        log::info!("{} signed in as {:?}", user.name, user.role);
        self.user = Some(user);
        self.view = Some(view);
        view
    }

    pub fn logout(&mut self) {
        if let Some(user) = self.user.take() {
            log::info!("{} signed out", user.name);
        }
        self.recipe = None;
        self.view = None;
    }

    /// Ignored while signed out.
    pub fn navigate(&mut self, view: View) -> Option<View> {
        if self.user.is_some() {
            self.view = Some(view);
        }
        self.view
    }

    /// Promotes the signed-in user to marketer and opens the marketer view.
    pub fn upgrade_to_marketer(&mut self) -> bool {
        match self.user.as_mut() {
            Some(user) => {
                user.role = UserRole::Marketer;
                self.view = Some(View::Marketer);
                true
            }
            None => false,
        }
    }
}
