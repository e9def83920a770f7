use crate::http::Gateway;
use crate::pages::incident_form::IncidentFormPage;
use crate::pages::incident_list::IncidentListPage;
use crate::pages::login::LoginPage;
use crate::storage::LocalStorage;
use leptos::*;
use tracker_core::session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    List,
    Create,
    Edit(i64),
}

#[component]
pub fn App() -> impl IntoView {
    let gateway = Gateway::from_build_env();

    // Restore the persisted session once at startup; a stored pair seeds the
    // gateway and skips the login prompt.
    let start = match session::load_credentials(&LocalStorage) {
        Some(credentials) => {
            gateway.set_credentials(credentials);
            Page::List
        }
        None => Page::Login,
    };
    let page = create_rw_signal(start);

    view! {
      <main class="app">
        {move || match page.get() {
            Page::Login => view! { <LoginPage gateway=gateway.clone() page=page/> }.into_view(),
            Page::List => view! { <IncidentListPage gateway=gateway.clone() page=page/> }.into_view(),
            Page::Create => {
                view! { <IncidentFormPage gateway=gateway.clone() page=page incident_id=None/> }
                    .into_view()
            }
            Page::Edit(id) => {
                view! { <IncidentFormPage gateway=gateway.clone() page=page incident_id=Some(id)/> }
                    .into_view()
            }
        }}
      </main>
    }
}
