// Home Assistant REST API: client plus one module per endpoint family.

mod calendars;
mod camera;
mod client;
mod history;
mod services;
mod states;
mod system;
mod template;
mod webhook;

pub use client::HassClient;
pub use services::filter_services;
pub use states::filter_by_domain;
