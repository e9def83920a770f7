use crate::app::Page;
use crate::http::{self, Gateway};
use crate::storage::LocalStorage;
use leptos::ev::SubmitEvent;
use leptos::*;
use tracker_core::error::Failure;
use tracker_core::session::{self, Credentials};
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn LoginPage(gateway: Gateway, page: RwSignal<Page>) -> impl IntoView {
    let username = create_rw_signal(String::new());
    let password = create_rw_signal(String::new());
    let error = create_rw_signal(None::<String>);

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let gateway = gateway.clone();
        spawn_local(async move {
            let credentials = Credentials {
                username: username.get_untracked(),
                password: password.get_untracked(),
            };
            // Seed the gateway first so the login probe itself carries the
            // basic-auth header.
            gateway.set_credentials(credentials.clone());
            match http::login(&gateway).await {
                Ok(()) => {
                    session::save_credentials(&LocalStorage, &credentials);
                    error.set(None);
                    page.set(Page::List);
                }
                Err(err) => {
                    gateway.clear_credentials();
                    error.set(Some(Failure::Auth(err).message()));
                }
            }
        });
    };

    view! {
      <section class="panel login">
        <h2>"Login"</h2>
        <form on:submit=submit>
          <label>
            "Username:"
            <input
              type="text"
              prop:value=move || username.get()
              on:input=move |ev| username.set(event_target_value(&ev))
              required=true
            />
          </label>
          <label>
            "Password:"
            <input
              type="password"
              prop:value=move || password.get()
              on:input=move |ev| password.set(event_target_value(&ev))
              required=true
            />
          </label>
          <Show when=move || error.get().is_some() fallback=|| ()>
            <p class="error">{move || error.get().unwrap_or_default()}</p>
          </Show>
          <button type="submit">"Login"</button>
        </form>
      </section>
    }
}
