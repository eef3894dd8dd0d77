pub(crate) mod home_screen;
pub(crate) mod icon;
pub(crate) mod menu;
pub(crate) mod modal;
