pub mod footer;
pub mod layout;
pub mod navbar;
pub mod page;

pub use footer::Footer;
pub use layout::Layout;
pub use navbar::Navbar;
pub use page::Page;
