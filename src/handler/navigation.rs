use serde::Deserialize;
use serde::Serialize;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    Home,
    Register,
    RealtorRegister,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Register => "/register",
            Route::RealtorRegister => "/register/realtor",
        }
    }
}

/// Stack of open screens; `Home` is the root and is never popped.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self { stack: vec![Route::Home] }
    }

    pub fn current(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Returns to `route` if it is already open, otherwise opens it on top.
    ///
    /// Returns true when a new screen was opened, i.e. its state starts fresh.
    pub fn navigate(
        &mut self,
        route: Route,
    ) -> bool {
        if let Some(pos) = self.stack.iter().position(|r| *r == route) {
            self.stack.truncate(pos + 1);
            debug!("navigation::navigate::back_to::{:?}", route);
            false
        } else {
            self.stack.push(route);
            debug!("navigation::navigate::push::{:?}", route);
            true
        }
    }

    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        debug!("navigation::back::{:?}", popped);
        popped
    }
}
