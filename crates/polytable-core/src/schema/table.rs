/// Table-level configuration shared by every type stored in the table.
///
/// A type inherits the table of its nearest ancestor that declares one; a
/// hierarchy that declares none uses [`Table::default`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    /// Table name, used to qualify the discriminator column in scopes.
    pub name: Option<String>,

    /// Column holding the discriminator tag.
    pub discriminator_column: String,

    /// Primary key column. Always persisted.
    pub primary_key: String,

    /// Creation/update timestamp columns. Always persisted when enabled.
    pub timestamps: Option<Timestamps>,

    /// Soft-delete timestamp column. Always persisted when set.
    pub soft_delete: Option<String>,

    /// Additional temporal columns that are always persisted.
    pub dates: Vec<String>,

    /// Columns starting with this prefix describe a relation (join/pivot
    /// data) rather than the entity and are passed through on hydration.
    pub relation_prefix: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timestamps {
    pub created_at: String,
    pub updated_at: String,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Table {
        Table {
            name: Some(name.into()),
            ..Table::default()
        }
    }

    pub fn discriminator_column(mut self, column: impl Into<String>) -> Self {
        self.discriminator_column = column.into();
        self
    }

    pub fn primary_key(mut self, column: impl Into<String>) -> Self {
        self.primary_key = column.into();
        self
    }

    pub fn timestamps(mut self, timestamps: Option<Timestamps>) -> Self {
        self.timestamps = timestamps;
        self
    }

    pub fn soft_delete(mut self, column: impl Into<String>) -> Self {
        self.soft_delete = Some(column.into());
        self
    }

    pub fn dates<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dates = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn relation_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.relation_prefix = prefix.into();
        self
    }

    /// The discriminator column qualified with the table name, when the
    /// table is named.
    pub fn qualified_discriminator_column(&self) -> String {
        match &self.name {
            Some(table) => format!("{table}.{}", self.discriminator_column),
            None => self.discriminator_column.clone(),
        }
    }

    /// Columns every row of the table carries regardless of its type: the
    /// primary key, the discriminator and all temporal columns.
    pub fn structural_columns(&self) -> impl Iterator<Item = &str> + '_ {
        let timestamps = self
            .timestamps
            .iter()
            .flat_map(|ts| [ts.created_at.as_str(), ts.updated_at.as_str()]);

        [self.primary_key.as_str(), self.discriminator_column.as_str()]
            .into_iter()
            .chain(timestamps)
            .chain(self.soft_delete.as_deref())
            .chain(self.dates.iter().map(String::as_str))
    }

    pub fn is_relation_column(&self, column: &str) -> bool {
        !self.relation_prefix.is_empty() && column.starts_with(&self.relation_prefix)
    }
}

impl Default for Table {
    fn default() -> Self {
        Table {
            name: None,
            discriminator_column: "type".to_string(),
            primary_key: "id".to_string(),
            timestamps: Some(Timestamps::default()),
            soft_delete: None,
            dates: vec![],
            relation_prefix: "pivot_".to_string(),
        }
    }
}

impl Default for Timestamps {
    fn default() -> Self {
        Timestamps {
            created_at: "created_at".to_string(),
            updated_at: "updated_at".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_structural_columns() {
        let table = Table::default();
        assert_eq!(
            table.structural_columns().collect::<Vec<_>>(),
            ["id", "type", "created_at", "updated_at"]
        );
    }

    #[test]
    fn structural_columns_include_soft_delete_and_dates() {
        let table = Table::new("vehicles")
            .primary_key("identifier")
            .timestamps(None)
            .soft_delete("deleted_at")
            .dates(["purchase_date"]);
        assert_eq!(
            table.structural_columns().collect::<Vec<_>>(),
            ["identifier", "type", "deleted_at", "purchase_date"]
        );
    }

    #[test]
    fn qualified_discriminator_column() {
        let table = Table::new("cars").discriminator_column("discriminator");
        assert_eq!(table.qualified_discriminator_column(), "cars.discriminator");
        assert_eq!(Table::default().qualified_discriminator_column(), "type");
    }

    #[test]
    fn relation_columns() {
        let table = Table::default();
        assert!(table.is_relation_column("pivot_listing_id"));
        assert!(!table.is_relation_column("listing_id"));

        let table = table.relation_prefix("");
        assert!(!table.is_relation_column("pivot_listing_id"));
    }
}
