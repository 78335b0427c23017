mod help;
mod helpers;
mod share_link;

pub use help::HelpModal;
pub use share_link::ShareLinkModal;
