use crate::app::Page;
use crate::http::{self, Gateway};
use crate::storage::LocalStorage;
use leptos::ev::Event;
use leptos::*;
use tracker_core::error::Failure;
use tracker_core::incident::Status;
use tracker_core::list::{Fetch, ListState, DEFAULT_PAGE_SIZE};
use tracker_core::session;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn IncidentListPage(gateway: Gateway, page: RwSignal<Page>) -> impl IntoView {
    let mut initial = ListState::new(DEFAULT_PAGE_SIZE);
    let first_fetch = initial.refetch();
    let state = create_rw_signal(initial);

    // All fetches funnel through here; `apply` discards any response that is
    // not the latest issued, so rapid filter switching cannot paint stale
    // rows.
    let run_fetch = {
        let gateway = gateway.clone();
        move |fetch: Fetch| {
            let gateway = gateway.clone();
            spawn_local(async move {
                let result = http::list_incidents(&gateway, &fetch.query).await;
                state.update(|s| {
                    s.apply(fetch.seq, result);
                });
            });
        }
    };
    run_fetch(first_fetch);

    let on_filter = {
        let run_fetch = run_fetch.clone();
        move |ev: Event| {
            let filter = Status::parse(&event_target_value(&ev));
            if let Some(fetch) = state.try_update(|s| s.set_status_filter(filter)) {
                run_fetch(fetch);
            }
        }
    };

    let on_prev = {
        let run_fetch = run_fetch.clone();
        move |_| {
            if let Some(fetch) = state.try_update(|s| s.prev_page()).flatten() {
                run_fetch(fetch);
            }
        }
    };

    let on_next = {
        let run_fetch = run_fetch.clone();
        move |_| {
            if let Some(fetch) = state.try_update(|s| s.next_page()).flatten() {
                run_fetch(fetch);
            }
        }
    };

    let delete = {
        let gateway = gateway.clone();
        let run_fetch = run_fetch.clone();
        move |id: i64| {
            let gateway = gateway.clone();
            let run_fetch = run_fetch.clone();
            spawn_local(async move {
                match http::delete_incident(&gateway, id).await {
                    Ok(()) => {
                        // Refetch the same page; a now-short or empty last
                        // page is accepted as-is.
                        if let Some(fetch) = state.try_update(|s| s.refetch()) {
                            run_fetch(fetch);
                        }
                    }
                    Err(err) => {
                        let failure = Failure::Mutation(err);
                        web_sys::console::error_1(&JsValue::from_str(&failure.message()));
                    }
                }
            });
        }
    };

    let logout = {
        let gateway = gateway.clone();
        move |_| {
            session::clear_credentials(&LocalStorage);
            gateway.clear_credentials();
            page.set(Page::Login);
        }
    };

    view! {
      <section class="panel">
        <header class="toolbar">
          <h2>"Incident Tracker Dashboard"</h2>
          <div class="row">
            <select
              on:change=on_filter
              prop:value=move || {
                  state.with(|s| s.status_filter().map(Status::as_str).unwrap_or(""))
              }
            >
              <option value="">"Filter by Status: All"</option>
              {Status::ALL
                  .iter()
                  .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                  .collect_view()}
            </select>
            <button on:click=move |_| page.set(Page::Create)>"Create New Incident"</button>
            <button on:click=logout>"Logout"</button>
          </div>
        </header>

        <Show when=move || state.with(|s| s.last_error().is_some()) fallback=|| ()>
          <p class="error">
            {move || {
                state.with(|s| s.last_error().map(Failure::message).unwrap_or_default())
            }}
          </p>
        </Show>

        <table>
          <thead>
            <tr>
              <th>"Title"</th>
              <th>"Description"</th>
              <th>"Status"</th>
              <th>"Priority"</th>
              <th>"Actions"</th>
            </tr>
          </thead>
          <tbody>
            <For
              each=move || state.with(|s| s.incidents().to_vec())
              key=|incident| incident.id
              children=move |incident| {
                  let id = incident.id;
                  let delete = delete.clone();
                  let status_class =
                      format!("badge status-{}", incident.status.as_str().to_ascii_lowercase());
                  let priority_class = format!(
                      "badge priority-{}",
                      incident.priority.as_str().to_ascii_lowercase()
                  );
                  view! {
                    <tr>
                      <td>{incident.title.clone()}</td>
                      <td>{incident.description.clone().unwrap_or_default()}</td>
                      <td><span class=status_class>{incident.status.as_str()}</span></td>
                      <td><span class=priority_class>{incident.priority.as_str()}</span></td>
                      <td>
                        <button on:click=move |_| page.set(Page::Edit(id))>"Edit"</button>
                        <button on:click=move |_| delete(id)>"Delete"</button>
                      </td>
                    </tr>
                  }
              }
            />
          </tbody>
        </table>

        <footer class="pagination">
          <p class="meta">{move || format!("Showing Page {}", state.with(|s| s.page()))}</p>
          <div class="row">
            <button on:click=on_prev prop:disabled=move || state.with(|s| s.page() == 1)>
              "Prev"
            </button>
            <button on:click=on_next prop:disabled=move || state.with(|s| !s.has_next_page())>
              "Next"
            </button>
          </div>
        </footer>
      </section>
    }
}
