mod app_bar;
mod footer;
mod link_button;
mod logo;
mod search;
mod side_bar;
mod upload_dialog;

pub use app_bar::HomePageAppBar;
pub use footer::HomePageFooter;
pub use link_button::{LinkButton, LinkTarget};
pub use logo::Logo;
pub use search::Search;
pub use side_bar::SideBar;
pub use upload_dialog::UploadDialogWrapper;
