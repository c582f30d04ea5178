use diesel::prelude::*;

use crate::{
    domain::product::{
        NewProduct as DomainNewProduct, Product as DomainProduct, ProductListQuery,
        UpdateProduct as DomainUpdateProduct,
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, ProductReader, ProductWriter, RepositoryError, RepositoryResult,
    },
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let found = product::table
            .find(id)
            .select(DbProduct::as_select())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(found.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let total = product::table.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = product::table
            .select(DbProduct::as_select())
            .order(product::id.asc())
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pagination) = &query.pagination {
            // Pages that overflow or start past the last row are empty.
            let offset = (pagination.page.max(1) - 1)
                .checked_mul(pagination.per_page)
                .filter(|offset| *offset < total);
            let bounds = offset.and_then(|offset| {
                Some((
                    i64::try_from(offset).ok()?,
                    i64::try_from(pagination.per_page).ok()?,
                ))
            });
            match bounds {
                Some((offset, limit)) => items = items.offset(offset).limit(limit),
                None => return Ok((total, Vec::new())),
            }
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        Ok((total, db_products.into_iter().map(Into::into).collect()))
    }

    fn count_products(&self) -> RepositoryResult<usize> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let total = product::table.count().get_result::<i64>(&mut conn)?;

        Ok(total as usize)
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(product::table)
            .values(&db_new)
            .returning(DbProduct::as_returning())
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        use crate::schema::product;

        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(product::table.find(product_id))
            .set(&db_updates)
            .returning(DbProduct::as_returning())
            .get_result::<DbProduct>(&mut conn)
            .optional()?;

        updated.map(Into::into).ok_or(RepositoryError::NotFound)
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::product;

        let mut conn = self.conn()?;

        let deleted = diesel::delete(product::table.find(product_id)).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
