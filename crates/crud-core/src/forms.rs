//! Local Form State
//!
//! Editable copies of fetched entities. Pages hold one form per screen,
//! overwrite it whenever a fetch resolves, and turn it into a draft on submit.

use crate::domain::{
    ApiError, ApiResult, Comment, CommentDraft, Entity, Post, PostDraft, Product, ProductDraft,
    Recipe, RecipeDraft, Todo, TodoDraft,
};

/// Form state bound to one entity type
pub trait EditForm<E: Entity>: Sized + Clone {
    /// Rebuild the form from freshly fetched data
    fn sync(entity: &E) -> Self;

    /// Build the write body, rejecting input the backend should never see
    fn draft(&self) -> ApiResult<E::Draft>;
}

fn required(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{} is required", field)));
    }
    Ok(())
}

/// Split a multi-line text area into trimmed, non-empty lines
pub fn parse_ingredients(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

// ========================
// Recipe
// ========================

/// Add-recipe form; ingredients are typed one per line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecipeForm {
    pub title: String,
    pub description: String,
    pub ingredients_text: String,
    pub instructions: String,
}

impl EditForm<Recipe> for RecipeForm {
    fn sync(recipe: &Recipe) -> Self {
        Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            ingredients_text: recipe.ingredients.join("\n"),
            instructions: recipe.instructions.clone(),
        }
    }

    fn draft(&self) -> ApiResult<RecipeDraft> {
        required("Recipe title", &self.title)?;
        required("Description", &self.description)?;
        required("Instructions", &self.instructions)?;
        let ingredients = parse_ingredients(&self.ingredients_text);
        if ingredients.is_empty() {
            return Err(ApiError::InvalidInput("At least one ingredient is required".into()));
        }
        Ok(RecipeDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            ingredients,
            instructions: self.instructions.clone(),
        })
    }
}

// ========================
// Comment / Post / Todo
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentForm {
    pub body: String,
}

impl EditForm<Comment> for CommentForm {
    fn sync(comment: &Comment) -> Self {
        Self { body: comment.body.clone() }
    }

    fn draft(&self) -> ApiResult<CommentDraft> {
        Ok(CommentDraft { body: self.body.clone() })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub body: String,
}

impl EditForm<Post> for PostForm {
    fn sync(post: &Post) -> Self {
        Self {
            title: post.title.clone(),
            body: post.body.clone(),
        }
    }

    fn draft(&self) -> ApiResult<PostDraft> {
        Ok(PostDraft {
            title: self.title.clone(),
            body: self.body.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoForm {
    pub text: String,
    pub completed: bool,
}

impl EditForm<Todo> for TodoForm {
    fn sync(todo: &Todo) -> Self {
        Self {
            text: todo.todo.clone(),
            completed: todo.completed,
        }
    }

    fn draft(&self) -> ApiResult<TodoDraft> {
        Ok(TodoDraft {
            todo: self.text.clone(),
            completed: self.completed,
        })
    }
}

// ========================
// Product
// ========================

/// Add-product form; price stays text until submit
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub title: String,
    pub description: String,
    pub price_text: String,
    pub thumbnail: String,
}

impl EditForm<Product> for ProductForm {
    fn sync(product: &Product) -> Self {
        Self {
            title: product.title.clone(),
            description: product.description.clone(),
            price_text: product.price.to_string(),
            thumbnail: product.thumbnail.clone(),
        }
    }

    fn draft(&self) -> ApiResult<ProductDraft> {
        required("Product title", &self.title)?;
        let price: f64 = self
            .price_text
            .trim()
            .parse()
            .map_err(|_| ApiError::InvalidInput(format!("'{}' is not a price", self.price_text)))?;
        if !price.is_finite() || price < 0.0 {
            return Err(ApiError::InvalidInput("Price must be zero or more".into()));
        }
        Ok(ProductDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            price,
            thumbnail: self.thumbnail.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe_form(ingredients_text: &str) -> RecipeForm {
        RecipeForm {
            title: "Pancakes".into(),
            description: "Fluffy".into(),
            ingredients_text: ingredients_text.into(),
            instructions: "Mix and fry".into(),
        }
    }

    #[test]
    fn test_parse_ingredients_trims_and_drops_blank_lines() {
        let parsed = parse_ingredients("  flour \n\n eggs\r\n   \nmilk");
        assert_eq!(parsed, vec!["flour", "eggs", "milk"]);
    }

    #[test]
    fn test_recipe_draft_keeps_ingredient_order() {
        let draft = recipe_form("b\na\nc").draft().unwrap();
        assert_eq!(draft.ingredients, vec!["b", "a", "c"]);
        assert_eq!(draft.title, "Pancakes");
    }

    #[test]
    fn test_recipe_draft_requires_fields() {
        let mut form = recipe_form("flour");
        form.title = "   ".into();
        assert!(matches!(form.draft(), Err(ApiError::InvalidInput(_))));

        assert!(matches!(recipe_form("\n \n").draft(), Err(ApiError::InvalidInput(_))));
    }

    #[test]
    fn test_todo_sync_then_edit() {
        let todo = Todo { id: 1, todo: "Buy milk".into(), completed: false };
        let mut form = TodoForm::sync(&todo);
        assert_eq!(form.text, "Buy milk");
        assert!(!form.completed);

        form.completed = true;
        let draft = form.draft().unwrap();
        assert_eq!(draft, TodoDraft { todo: "Buy milk".into(), completed: true });
    }

    #[test]
    fn test_resync_overwrites_local_edits() {
        let mut form = PostForm::sync(&Post { id: 1, title: "Old".into(), body: "b".into() });
        form.title = "Edited".into();
        form = PostForm::sync(&Post { id: 1, title: "Fresh".into(), body: "b".into() });
        assert_eq!(form.title, "Fresh");
    }

    #[test]
    fn test_product_price_parsing() {
        let mut form = ProductForm {
            title: "Lamp".into(),
            price_text: " 12.50 ".into(),
            ..Default::default()
        };
        assert_eq!(form.draft().unwrap().price, 12.5);

        form.price_text = "cheap".into();
        assert!(matches!(form.draft(), Err(ApiError::InvalidInput(_))));

        form.price_text = "-1".into();
        assert!(matches!(form.draft(), Err(ApiError::InvalidInput(_))));
    }
}
