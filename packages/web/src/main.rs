use std::str::FromStr;

use dioxus::prelude::*;
use store::guard::{ADMIN_PATH, EMPLOYEE_PATH, OWNER_PATH, TENANT_PATH};
use store::{Decision, RoutePolicy};
use ui::views::{AdminDashboard, EmployeeDashboard, OwnerDashboard, TenantDashboard, UnauthorizedView};
use ui::{use_auth, AuthProvider};
use views::{Login, Register};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/unauthorized")]
    Unauthorized {},
    #[route("/admin")]
    Admin {},
    #[route("/owner")]
    Owner {},
    #[route("/tenant")]
    Tenant {},
    #[route("/employee")]
    Employee {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

impl Route {
    /// Map a guard path back onto the route table; unknown paths go to `/`.
    fn from_path(path: &str) -> Self {
        Route::from_str(path).unwrap_or(Route::Root {})
    }
}

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: ui::DASHBOARD_CSS }

        AuthProvider {
            Router::<Route> {}
        }
    }
}

/// Replace the current history entry with `to`.
#[component]
fn Redirect(to: String) -> Element {
    let nav = use_navigator();
    nav.replace(Route::from_path(&to));
    rsx! {}
}

/// Render `children` only if the route policy admits the session on `path`.
#[component]
fn Guarded(path: String, children: Element) -> Element {
    let auth = use_auth();
    match RoutePolicy::navigate(&auth(), &path) {
        Decision::Render => rsx! { {children} },
        Decision::Redirect(to) => {
            tracing::debug!(from = %path, to, "Route guard redirect");
            rsx! { Redirect { to: to.to_string() } }
        }
    }
}

/// Send `/` to the signed-in role's dashboard, or to `/login`.
#[component]
fn Root() -> Element {
    let auth = use_auth();
    let landing = RoutePolicy::landing(&auth());
    rsx! { Redirect { to: landing.to_string() } }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    tracing::debug!(path = %segments.join("/"), "Unknown route");
    rsx! { Redirect { to: "/" } }
}

#[component]
fn Unauthorized() -> Element {
    rsx! { UnauthorizedView {} }
}

#[component]
fn Admin() -> Element {
    rsx! {
        Guarded { path: ADMIN_PATH.to_string(), AdminDashboard {} }
    }
}

#[component]
fn Owner() -> Element {
    rsx! {
        Guarded { path: OWNER_PATH.to_string(), OwnerDashboard {} }
    }
}

#[component]
fn Tenant() -> Element {
    rsx! {
        Guarded { path: TENANT_PATH.to_string(), TenantDashboard {} }
    }
}

#[component]
fn Employee() -> Element {
    rsx! {
        Guarded { path: EMPLOYEE_PATH.to_string(), EmployeeDashboard {} }
    }
}
