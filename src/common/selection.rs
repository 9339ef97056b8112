use crate::common::condition;

/// Separator between projected attributes.
const PROJECTION_SEPARATOR: &str = ", ";

impl<T> condition::ExpressionBuilder<T> {
    /// Compile a projection expression from attribute paths.
    ///
    /// An empty list yields `None`: no projection was requested, which is different from
    /// projecting nothing.
    ///
    /// ```rust
    /// use dynamodb_expression::common::condition::ExpressionBuilder;
    /// use serde_json::Value;
    ///
    /// let mut builder: ExpressionBuilder<Value> = ExpressionBuilder::new();
    /// let projection = builder.projection(["id", "profile.email", "tags[0]"]);
    /// assert_eq!(projection.as_deref(), Some("#id, #profile.#email, #tags[0]"));
    /// assert_eq!(builder.projection(Vec::<String>::new()), None);
    /// ```
    pub fn projection<I>(&mut self, paths: I) -> Option<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let references: Vec<_> = paths
            .into_iter()
            .map(|path| self.attribute(path.as_ref()))
            .collect();
        if references.is_empty() {
            None
        } else {
            Some(references.join(PROJECTION_SEPARATOR))
        }
    }
}
