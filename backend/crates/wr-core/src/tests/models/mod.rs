mod clothing_item;
mod section;
mod subscription_plan;
