use crate::app::Page;
use crate::http::{self, Gateway};
use leptos::ev::SubmitEvent;
use leptos::*;
use tracker_core::error::Failure;
use tracker_core::forms::IncidentForm;
use tracker_core::incident::{Priority, Status};
use wasm_bindgen_futures::spawn_local;

/// Create and edit share one form. `incident_id` switches the mode: `Some`
/// loads the record on mount and submits a PUT, `None` starts from the
/// defaults and submits a POST. A failed submit keeps every entered value.
#[component]
pub fn IncidentFormPage(
    gateway: Gateway,
    page: RwSignal<Page>,
    incident_id: Option<i64>,
) -> impl IntoView {
    let form = create_rw_signal(IncidentForm::default());
    let error = create_rw_signal(None::<String>);
    let loading = create_rw_signal(incident_id.is_some());

    if let Some(id) = incident_id {
        let gateway = gateway.clone();
        spawn_local(async move {
            match http::get_incident(&gateway, id).await {
                Ok(incident) => {
                    form.set(IncidentForm::from_incident(&incident));
                    loading.set(false);
                }
                Err(err) => {
                    error.set(Some(Failure::Fetch(err).message()));
                    loading.set(false);
                }
            }
        });
    }

    let submit = {
        let gateway = gateway.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let current = form.get_untracked();
            if let Err(message) = current.validate() {
                error.set(Some(message.to_string()));
                return;
            }
            let gateway = gateway.clone();
            spawn_local(async move {
                let draft = current.draft();
                let result = match incident_id {
                    Some(id) => http::update_incident(&gateway, id, &draft).await.map(drop),
                    None => http::create_incident(&gateway, &draft).await.map(drop),
                };
                match result {
                    Ok(()) => page.set(Page::List),
                    Err(err) => error.set(Some(Failure::Mutation(err).message())),
                }
            });
        }
    };

    let heading = if incident_id.is_some() {
        "Edit Incident"
    } else {
        "Create New Incident"
    };
    let submit_label = if incident_id.is_some() {
        "Save Changes"
    } else {
        "Create Incident"
    };

    view! {
      <section class="panel form">
        <h2>{heading}</h2>
        <Show when=move || !loading.get() fallback=|| view! { <p>"Loading..."</p> }>
          <form on:submit=submit.clone()>
            <label>
              "Title"
              <input
                type="text"
                prop:value=move || form.with(|f| f.title.clone())
                on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                placeholder="e.g., Unable to access user dashboard"
                required=true
              />
            </label>
            <label>
              "Description"
              <textarea
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                placeholder="Provide a detailed explanation of the issue..."
                rows=6
                required=true
              ></textarea>
            </label>
            <div class="row">
              <label>
                "Status"
                <select
                  prop:value=move || form.with(|f| f.status.as_str())
                  on:change=move |ev| {
                      if let Some(status) = Status::parse(&event_target_value(&ev)) {
                          form.update(|f| f.status = status);
                      }
                  }
                >
                  {Status::ALL
                      .iter()
                      .map(|s| view! { <option value=s.as_str()>{s.as_str()}</option> })
                      .collect_view()}
                </select>
              </label>
              <label>
                "Priority"
                <select
                  prop:value=move || form.with(|f| f.priority.as_str())
                  on:change=move |ev| {
                      if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                          form.update(|f| f.priority = priority);
                      }
                  }
                >
                  {Priority::ALL
                      .iter()
                      .map(|p| view! { <option value=p.as_str()>{p.as_str()}</option> })
                      .collect_view()}
                </select>
              </label>
            </div>
            <Show when=move || error.get().is_some() fallback=|| ()>
              <p class="error">{move || error.get().unwrap_or_default()}</p>
            </Show>
            <div class="row">
              <button type="button" on:click=move |_| page.set(Page::List)>"Cancel"</button>
              <button type="submit">{submit_label}</button>
            </div>
          </form>
        </Show>
      </section>
    }
}
