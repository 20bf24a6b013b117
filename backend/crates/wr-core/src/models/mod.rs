pub mod clothing_item;
pub mod saved_outfit;
pub mod section;
pub mod subscription_plan;
pub mod user_profile;
