//! Query parameter accumulation

use std::fmt;

use crate::builder::core::RequestBuilder;

impl RequestBuilder {
    /// Append a query parameter
    ///
    /// `value` is converted with its `Display` implementation. Repeating a
    /// name keeps every value in call order.
    ///
    /// # Examples
    /// ```
    /// use rat::RequestBuilder;
    ///
    /// let request = RequestBuilder::new("/search")
    ///     .query("a", 1)
    ///     .query("a", 2)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(request.query().get_all("a"), ["1", "2"]);
    /// ```
    #[must_use]
    pub fn query(mut self, name: &str, value: impl fmt::Display) -> Self {
        let value = value.to_string();
        if self.debug_enabled {
            log::debug!("Rat Builder: query {name}={value}");
        }
        self.request.query_mut().add(name, value);
        self
    }
}
