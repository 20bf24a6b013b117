pub mod clothes;
pub mod clothing_item_dto;
pub mod clothing_item_list_response;
pub mod clothing_item_response;
pub mod create_clothing_item_request;
pub mod list_clothes_query;
pub mod update_clothing_item_request;
