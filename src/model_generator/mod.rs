// Model rendering and output generation
pub mod naming;
pub mod renderer;
pub mod template;
pub mod type_mapper;
pub mod writer;


pub use naming::NamingStrategy;
pub use renderer::ModelRenderer;
pub use type_mapper::TypeMapping;
pub use writer::OutputWriter;
