use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Route;

/// Server-assigned user identifier.
pub type UserId = i64;

/// A user profile as exchanged with the user service.
///
/// Only the ride-related flags are typed; every other profile field is carried
/// through untouched in `profile` so round-trips never drop data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub is_driver: bool,
    #[serde(default)]
    pub is_accepting_rides: bool,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

impl User {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    /// Set an untyped profile field such as `firstName` or `batch`.
    pub fn with_profile(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.profile.insert(field.into(), value.into());
        self
    }

    /// Reset the ride flags for a freshly signed-up account.
    pub fn prepare_for_signup(&mut self) {
        self.active = true;
        self.is_driver = false;
        self.is_accepting_rides = false;
    }

    /// Change the driver role; a driver accepts rides exactly when the account is active.
    pub fn set_driver(&mut self, is_driver: bool) {
        self.is_driver = is_driver;
        self.is_accepting_rides = self.active && is_driver;
    }

    pub fn apply_preference(&mut self, preference: Preference) {
        match preference {
            Preference::Active(active) => self.active = active,
            Preference::IsDriver(is_driver) => self.is_driver = is_driver,
            Preference::IsAcceptingRides(accepting) => self.is_accepting_rides = accepting,
        }
        self.enforce_ride_invariant();
    }

    /// Only active drivers may accept rides.
    pub fn enforce_ride_invariant(&mut self) {
        if !(self.active && self.is_driver) {
            self.is_accepting_rides = false;
        }
    }
}

/// A single updatable ride preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Active(bool),
    IsDriver(bool),
    IsAcceptingRides(bool),
}

impl Preference {
    /// Field name on the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Preference::Active(_) => "active",
            Preference::IsDriver(_) => "isDriver",
            Preference::IsAcceptingRides(_) => "isAcceptingRides",
        }
    }

    pub fn value(&self) -> bool {
        match *self {
            Preference::Active(v) | Preference::IsDriver(v) | Preference::IsAcceptingRides(v) => v,
        }
    }
}

/// Role picked at sign-up; decides where the user lands afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupRole {
    Driver,
    Rider,
}

impl SignupRole {
    /// Anything other than `"driver"` signs up as a rider.
    pub fn from_name(name: &str) -> Self {
        if name == "driver" {
            SignupRole::Driver
        } else {
            SignupRole::Rider
        }
    }

    pub fn landing_route(&self) -> Route {
        match self {
            SignupRole::Driver => Route::CarRegistration,
            SignupRole::Rider => Route::DriversHome,
        }
    }
}
