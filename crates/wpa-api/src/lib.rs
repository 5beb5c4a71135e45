//! wpa-api library crate.
//!
//! An HTTP front end over `wpa-core` for managing the networks in a
//! `wpa_supplicant.conf` file.
//!
//! # Architecture (clean architecture)
//!
//! ```text
//! HTTP client (JSON)
//!         ↕
//! [wpa-api]
//!   ├── domain/           Pure types: ApiConfig, request/response bodies
//!   └── infrastructure/
//!         ├── handlers/   One actix handler per route
//!         ├── error/      WpaError → HTTP status + JSON body
//!         └── server/     Route table and HttpServer startup
//!         ↕
//! wpa-core CredentialService → wpa_supplicant.conf
//! ```
//!
//! # Routes
//!
//! | Method | Path            | Action                                     |
//! |--------|-----------------|--------------------------------------------|
//! | GET    | `/ssids`        | list bare SSIDs                            |
//! | GET    | `/ssids/{ssid}` | the raw network block, 404 if absent       |
//! | POST   | `/ssids`        | upsert from `{"ssid", "password"}`         |
//! | PUT    | `/ssids/{ssid}` | upsert with `?new_password=`               |
//! | DELETE | `/ssids/{ssid}` | delete, 404 if absent                      |
//!
//! Every request performs its own read-modify-write cycle on the file; the
//! service keeps no parsed state between requests.

/// Domain layer: configuration and message types (no I/O).
pub mod domain;

/// Infrastructure layer: HTTP handlers, error mapping and server startup.
pub mod infrastructure;
