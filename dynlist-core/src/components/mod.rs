pub mod help_bar;
pub mod item_list;
pub mod toolbar;
pub mod warning_banner;

pub use crate::component::Component;

pub use help_bar::{HelpBar, HelpBarProps};
pub use item_list::{ItemList, ItemListProps, RowHit, INCREMENT_LABEL};
pub use toolbar::{Toolbar, ToolbarProps, ADD_LABEL, REMOVE_LABEL};
pub use warning_banner::{WarningBanner, WarningBannerProps, CLOSE_SYMBOL};
