use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    Set, sea_query::Expr,
};

use crate::{
    entities::{director, genre, movie},
    error::AppResult,
    models::{MovieColumns, NamePatch, NewMovie, NewNamed},
};

/// Repository over the catalog tables. Holds the connection explicitly; there
/// is no global database handle anywhere.
#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn list_movies(
        &self,
        director_id: Option<i32>,
        genre_id: Option<i32>,
    ) -> AppResult<Vec<movie::Model>> {
        let mut query = movie::Entity::find();
        if let Some(id) = director_id {
            query = query.filter(movie::Column::DirectorId.eq(id));
        }
        if let Some(id) = genre_id {
            query = query.filter(movie::Column::GenreId.eq(id));
        }
        Ok(query.all(&self.db).await?)
    }

    pub async fn get_movie(&self, id: i32) -> AppResult<Option<movie::Model>> {
        Ok(movie::Entity::find_by_id(id).one(&self.db).await?)
    }

    // Referenced genre_id/director_id are taken as-is, with no existence check.
    pub async fn create_movie(&self, new: NewMovie) -> AppResult<i32> {
        let model = movie::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            description: Set(new.description),
            trailer: Set(new.trailer),
            year: Set(new.year),
            rating: Set(new.rating),
            genre_id: Set(new.genre_id),
            director_id: Set(new.director_id),
        };
        let res = movie::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    /// Bulk column update without a prior load. Returns the number of rows
    /// affected; the caller decides what zero means. An empty column set
    /// touches nothing.
    pub async fn column_update_movie(&self, id: i32, columns: MovieColumns) -> AppResult<u64> {
        if columns.is_empty() {
            return Ok(0);
        }

        let mut update = movie::Entity::update_many().filter(movie::Column::Id.eq(id));
        if let Some(title) = columns.title {
            update = update.col_expr(movie::Column::Title, Expr::value(title));
        }
        if let Some(description) = columns.description {
            update = update.col_expr(movie::Column::Description, Expr::value(description));
        }
        if let Some(trailer) = columns.trailer {
            update = update.col_expr(movie::Column::Trailer, Expr::value(trailer));
        }
        if let Some(year) = columns.year {
            update = update.col_expr(movie::Column::Year, Expr::value(year));
        }
        if let Some(rating) = columns.rating {
            update = update.col_expr(movie::Column::Rating, Expr::value(rating));
        }
        if let Some(genre_id) = columns.genre_id {
            update = update.col_expr(movie::Column::GenreId, Expr::value(genre_id));
        }
        if let Some(director_id) = columns.director_id {
            update = update.col_expr(movie::Column::DirectorId, Expr::value(director_id));
        }

        Ok(update.exec(&self.db).await?.rows_affected)
    }

    pub async fn delete_movie(&self, id: i32) -> AppResult<bool> {
        let res = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn list_directors(&self) -> AppResult<Vec<director::Model>> {
        Ok(director::Entity::find().all(&self.db).await?)
    }

    pub async fn get_director(&self, id: i32) -> AppResult<Option<director::Model>> {
        Ok(director::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create_director(&self, new: NewNamed) -> AppResult<i32> {
        let model = director::ActiveModel { id: Default::default(), name: Set(new.name) };
        let res = director::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    /// Merge update: loads the record and overwrites only supplied fields.
    /// Returns false when the id does not resolve to a record.
    pub async fn merge_update_director(&self, id: i32, patch: NamePatch) -> AppResult<bool> {
        let Some(existing) = director::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(false);
        };
        let Some(name) = patch.name else {
            return Ok(true);
        };
        let mut model = existing.into_active_model();
        model.name = Set(name);
        model.update(&self.db).await?;
        Ok(true)
    }

    pub async fn delete_director(&self, id: i32) -> AppResult<bool> {
        let res = director::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }

    pub async fn list_genres(&self) -> AppResult<Vec<genre::Model>> {
        Ok(genre::Entity::find().all(&self.db).await?)
    }

    pub async fn get_genre(&self, id: i32) -> AppResult<Option<genre::Model>> {
        Ok(genre::Entity::find_by_id(id).one(&self.db).await?)
    }

    pub async fn create_genre(&self, new: NewNamed) -> AppResult<i32> {
        let model = genre::ActiveModel { id: Default::default(), name: Set(new.name) };
        let res = genre::Entity::insert(model).exec(&self.db).await?;
        Ok(res.last_insert_id)
    }

    pub async fn merge_update_genre(&self, id: i32, patch: NamePatch) -> AppResult<bool> {
        let Some(existing) = genre::Entity::find_by_id(id).one(&self.db).await? else {
            return Ok(false);
        };
        let Some(name) = patch.name else {
            return Ok(true);
        };
        let mut model = existing.into_active_model();
        model.name = Set(name);
        model.update(&self.db).await?;
        Ok(true)
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<bool> {
        let res = genre::Entity::delete_by_id(id).exec(&self.db).await?;
        Ok(res.rows_affected > 0)
    }
}
