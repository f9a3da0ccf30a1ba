//! Page section components and the assistant chat widget.

pub mod about;
pub mod chat_widget;
pub mod contact;
pub mod education;
pub mod experience;
pub mod hero;
pub mod nav_bar;
pub mod site_footer;
pub mod skills;
