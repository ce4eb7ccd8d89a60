use tracing::{debug, trace};

use crate::convert::Adapter;
use crate::error::Error;
use crate::record::{FieldValue, Record, RecordDescriptor};
use crate::xmltree::{Node, XmlTree};

// Where in the record hierarchy a record is being translated. Only the
// record passed to `translate` gets its class adapter applied.
#[derive(Debug, Clone, Copy)]
enum Level {
    Top(Option<Adapter>),
    Nested,
}

/// ## Translation of records
impl XmlTree {
    /// Translate a record into a new, detached tag.
    ///
    /// The tag is named after the record type, or its custom name. Fields
    /// are translated in declaration order: an attribute field becomes an
    /// attribute, any other scalar field a text tag, and every record in a
    /// list field a nested tag. The class adapter of the record, if any,
    /// transforms the tag name, field names and values of this record only.
    ///
    /// Inside nested records a list field becomes a tag named after the
    /// field, holding the tags of its records.
    ///
    /// On failure nothing is left behind in the tree.
    pub fn translate<R: Record>(&mut self, record: &R) -> Result<Node, Error> {
        let descriptor = R::descriptor();
        debug!(record = descriptor.type_name(), "translating record");
        let adapter = descriptor.class_adapter();
        let name = adapt(adapter, descriptor.xml_name()?, descriptor.type_name())?;
        let root = self.new_tag(&name)?;
        self.translate_into(root, record, descriptor, Level::Top(adapter))
    }

    pub(crate) fn translate_plain<R: Record>(&mut self, record: &R) -> Result<Node, Error> {
        let descriptor = R::descriptor();
        let root = self.new_tag(descriptor.xml_name()?)?;
        self.translate_into(root, record, descriptor, Level::Nested)
    }

    fn translate_into<R: Record>(
        &mut self,
        root: Node,
        record: &R,
        descriptor: &RecordDescriptor<R>,
        level: Level,
    ) -> Result<Node, Error> {
        match self.translate_fields(root, record, descriptor, level) {
            Ok(()) => Ok(root),
            Err(e) => {
                debug!(record = descriptor.type_name(), error = %e, "translation failed");
                self.remove_subtree(root);
                Err(e)
            }
        }
    }

    fn translate_fields<R: Record>(
        &mut self,
        root: Node,
        record: &R,
        descriptor: &RecordDescriptor<R>,
        level: Level,
    ) -> Result<(), Error> {
        for field in descriptor.fields() {
            if field.is_ignored() {
                trace!(field = field.ident(), "ignored");
                continue;
            }
            match field.value(record) {
                FieldValue::Records(records) => {
                    let parent = match level {
                        Level::Top(_) => root,
                        Level::Nested => {
                            let wrapper = self.new_tag(field.xml_name())?;
                            self.add_element(root, wrapper)?;
                            wrapper
                        }
                    };
                    trace!(field = field.ident(), count = records.len(), "records");
                    for nested in records {
                        let child = nested.translate_nested(self)?;
                        self.add_element(parent, child)?;
                    }
                }
                value => {
                    let text = field.text(&value)?;
                    let (name, text) = match level {
                        Level::Top(adapter) => (
                            adapt(adapter, field.xml_name(), field.ident())?,
                            adapt(adapter, &text, field.ident())?,
                        ),
                        Level::Nested => (field.xml_name().to_string(), text),
                    };
                    trace!(field = field.ident(), name = %name, text = %text, "scalar");
                    if field.is_attribute() {
                        self.add_attribute(root, &name, &text)?;
                    } else {
                        let text_tag = self.new_text_tag(&name, &text)?;
                        self.add_element(root, text_tag)?;
                    }
                }
            }
        }
        Ok(())
    }
}

fn adapt(adapter: Option<Adapter>, value: &str, owner: &str) -> Result<String, Error> {
    match adapter {
        Some(adapter) => adapter
            .transform(value)
            .map_err(|e| Error::ConversionFailure {
                name: owner.to_string(),
                message: e.to_string(),
            }),
        None => Ok(value.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use super::*;
    use crate::convert::{Converter, Percentage};
    use crate::record::Directive;

    struct Componente {
        nome: &'static str,
        peso: Option<i32>,
    }

    impl Record for Componente {
        fn descriptor() -> &'static RecordDescriptor<Self> {
            static DESCRIPTOR: OnceLock<RecordDescriptor<Componente>> = OnceLock::new();
            DESCRIPTOR.get_or_init(|| {
                RecordDescriptor::<Self>::new()
                    .name("componente")
                    .field_with("nome", &[Directive::Attribute], |c| c.nome.into())
                    .field_with(
                        "peso",
                        &[Directive::Convert(Converter::of::<Percentage>())],
                        |c| c.peso.into(),
                    )
            })
        }
    }

    struct Fuc {
        avaliacao: Vec<Componente>,
    }

    impl Record for Fuc {
        fn descriptor() -> &'static RecordDescriptor<Self> {
            static DESCRIPTOR: OnceLock<RecordDescriptor<Fuc>> = OnceLock::new();
            DESCRIPTOR.get_or_init(|| {
                RecordDescriptor::<Self>::new()
                    .name("fuc")
                    .field("nome", |_| "PA".into())
                    .field("avaliacao", |f| (&f.avaliacao).into())
            })
        }
    }

    fn live_nodes(xml: &XmlTree) -> usize {
        xml.arena().iter().filter(|node| !node.is_removed()).count()
    }

    #[test]
    fn test_failure_removes_partial_tree() {
        let mut xml = XmlTree::new();
        let doc = xml.new_document();
        let fuc = Fuc {
            avaliacao: vec![
                Componente {
                    nome: "Quizzes",
                    peso: Some(20),
                },
                Componente {
                    nome: "Projeto",
                    peso: None,
                },
            ],
        };
        let err = xml.translate(&fuc).unwrap_err();
        assert!(matches!(err, Error::ConversionFailure { ref name, .. } if name == "peso"));
        assert_eq!(live_nodes(&xml), 1);
        assert_eq!(xml.descendants(doc).count(), 1);
    }

    #[test]
    fn test_nested_list_gets_wrapper() {
        struct Plano(Vec<Fuc>);
        impl Record for Plano {
            fn descriptor() -> &'static RecordDescriptor<Self> {
                static DESCRIPTOR: OnceLock<RecordDescriptor<Plano>> = OnceLock::new();
                DESCRIPTOR
                    .get_or_init(|| RecordDescriptor::<Self>::new().field("fucs", |p| (&p.0).into()))
            }
        }

        let mut xml = XmlTree::new();
        let plano = Plano(vec![Fuc {
            avaliacao: vec![Componente {
                nome: "Quizzes",
                peso: Some(20),
            }],
        }]);
        let node = xml.translate(&plano).unwrap();
        assert_eq!(xml.name(node), "Plano");
        assert_eq!(xml.xpath(node, "Plano/fuc/avaliacao/componente").len(), 1);
        assert!(xml.xpath(node, "fucs").is_empty());
        assert_eq!(live_nodes(&xml), 5);
    }
}
