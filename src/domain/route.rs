use std::fmt;

/// Client-side navigation targets reached from this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Car registration, shown to users who signed up as drivers.
    CarRegistration,
    DriversHome,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::CarRegistration => "new/car",
            Route::DriversHome => "home/drivers",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
