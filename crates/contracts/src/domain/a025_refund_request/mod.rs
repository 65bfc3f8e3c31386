//! A025 Заявка на возврат: классификация по вкладкам, доступные действия
//! и сборка карточек для экранов покупателя, продавца и администратора.

pub mod actions;
pub mod aggregate;
pub mod board;
pub mod dto;
pub mod statuses;
pub mod tabs;
