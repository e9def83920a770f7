mod app;
mod http;
mod storage;

pub mod pages {
    pub mod incident_form;
    pub mod incident_list;
    pub mod login;
}

use app::App;
use leptos::*;

fn main() {
    mount_to_body(App);
}
