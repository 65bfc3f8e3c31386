//! Общие контракты витрины возвратов: типы API, реестры статусов
//! и чистые функции построения вкладок и карточек.

pub mod domain;
pub mod enums;
pub mod shared;
