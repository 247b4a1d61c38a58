//! Reusable UI components

mod faq_item;
mod faq_list;

pub use faq_item::FaqItem;
pub use faq_list::FaqList;
