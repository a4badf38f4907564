//! Controller registry module
//!
//! Controllers are enumerated at compile time and loaded in declaration
//! order; each setup registers its routes on the shared route table.

pub mod blog;
pub mod pages;

use crate::logger;
use crate::routing::Router;

/// A controller's route-registration entry point
pub type SetupFn = fn(&mut Router);

/// The controller registry, in load order
pub const CONTROLLERS: &[(&str, SetupFn)] = &[("pages", pages::setup), ("blog", blog::setup)];

/// Load every registered controller, logging each by name
pub fn load_controllers(router: &mut Router) {
    for (name, setup) in CONTROLLERS {
        logger::log_loading_controller(name);
        setup(router);
    }
}
