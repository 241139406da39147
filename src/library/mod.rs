//! tabletop.events games library client

mod client;

pub use client::{
    LibraryClient, DEFAULT_API_URL, DEFAULT_ITEMS_PER_PAGE, DEFAULT_PAGE_DELAY,
    GEN_CON_LIBRARY_ID,
};
