use skyedoc_idf::IRNode;

/// A helper trait for cloning trait objects of `TemplateBuilder`.
pub trait CloneTemplateBuilder {
    fn clone_box(&self) -> Box<dyn TemplateBuilder>;
}

impl<T> CloneTemplateBuilder for T
where
    T: 'static + TemplateBuilder + Clone,
{
    fn clone_box(&self) -> Box<dyn TemplateBuilder> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn TemplateBuilder> {
    fn clone(&self) -> Box<dyn TemplateBuilder> {
        self.clone_box()
    }
}

/// The central trait for all block builder structs.
///
/// It allows for polymorphic composition, so different builders (a
/// `Paragraph`, an `Image`, a `Rule`) can be stored side by side in a `Vec`.
pub trait TemplateBuilder: CloneTemplateBuilder + Send + Sync {
    /// Consumes the builder and returns the finished block.
    fn build(self: Box<Self>) -> IRNode;
}
