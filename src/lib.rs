pub mod config;
pub mod decode;
pub mod error;
pub mod events;
pub mod speech;
pub mod state;
pub mod studio;
pub mod compose {
    pub mod canvas;
    pub mod caption;
    pub mod layout;
}
