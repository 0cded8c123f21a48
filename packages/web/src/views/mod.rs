mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod recipes;
pub use recipes::Recipes;

mod recipe_detail;
pub use recipe_detail::RecipeDetail;

mod meal_search;
pub use meal_search::MealSearch;

mod meal_detail;
pub use meal_detail::MealDetail;
