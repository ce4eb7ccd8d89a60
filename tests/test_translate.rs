use std::sync::OnceLock;

use rstest::rstest;
use xmltag::{
    BoxError, Converter, Directive, Error, FieldValue, Percentage, Record, RecordDescriptor,
    StringAdapter, UpperCase, XmlTree,
};

struct StudentNames {
    number: i32,
    name: String,
    age: i32,
    course: String,
    worker: bool,
}

impl Record for StudentNames {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<StudentNames>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("estudante")
                .field_with("number", &[Directive::Name("numero")], |s| s.number.into())
                .field_with("name", &[Directive::Name("nome")], |s| (&s.name).into())
                .field_with("age", &[Directive::Name("idade")], |s| s.age.into())
                .field_with("course", &[Directive::Name("curso")], |s| (&s.course).into())
                .field_with("worker", &[Directive::Name("trabalhador")], |s| {
                    s.worker.into()
                })
        })
    }
}

struct StudentIgnore {
    number: i32,
    name: String,
    age: i32,
    course: String,
    worker: bool,
}

impl Record for StudentIgnore {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<StudentIgnore>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("student")
                .field("number", |s| s.number.into())
                .field("name", |s| (&s.name).into())
                .field_with("age", &[Directive::Ignore], |s| s.age.into())
                .field("course", |s| (&s.course).into())
                .field_with("worker", &[Directive::Ignore], |s| s.worker.into())
        })
    }
}

// named after its type
struct Student {
    number: i32,
    name: String,
    age: i32,
    course: String,
    worker: bool,
}

impl Record for Student {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Student>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .field_with("number", &[Directive::Attribute], |s| s.number.into())
                .field("name", |s| (&s.name).into())
                .field("age", |s| s.age.into())
                .field("course", |s| (&s.course).into())
                .field("worker", |s| s.worker.into())
        })
    }
}

struct UpperStudent(Student);

impl Record for UpperStudent {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<UpperStudent>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("student")
                .adapter::<UpperCase>()
                .field_with("number", &[Directive::Attribute], |s| s.0.number.into())
                .field("name", |s| (&s.0.name).into())
                .field("age", |s| s.0.age.into())
                .field("course", |s| (&s.0.course).into())
                .field("worker", |s| s.0.worker.into())
        })
    }
}

struct Componente {
    nome: String,
    peso: i32,
    nota: f64,
}

impl Record for Componente {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Componente>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("componente")
                .field_with("nome", &[Directive::Attribute], |c| (&c.nome).into())
                .field_with(
                    "peso",
                    &[
                        Directive::Attribute,
                        Directive::Convert(Converter::of::<Percentage>()),
                    ],
                    |c| c.peso.into(),
                )
                .field_with("nota", &[Directive::Ignore], |c| c.nota.into())
        })
    }
}

struct Fuc {
    codigo: String,
    nome: String,
    ects: f64,
    avaliacao: Vec<Componente>,
}

impl Record for Fuc {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Fuc>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("fuc")
                .field_with("codigo", &[Directive::Attribute], |f| (&f.codigo).into())
                .field("nome", |f| (&f.nome).into())
                .field("ects", |f| f.ects.into())
                .field("avaliacao", |f| (&f.avaliacao).into())
        })
    }
}

struct Plano {
    curso: String,
    fucs: Vec<Fuc>,
}

impl Record for Plano {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Plano>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("plano")
                .field("curso", |p| (&p.curso).into())
                .field("fucs", |p| (&p.fucs).into())
        })
    }
}

fn componente(nome: &str, peso: i32, nota: f64) -> Componente {
    Componente {
        nome: nome.to_string(),
        peso,
        nota,
    }
}

fn plano() -> Plano {
    Plano {
        curso: "Mestrado em Engenharia Informática".to_string(),
        fucs: vec![
            Fuc {
                codigo: "M4310".to_string(),
                nome: "Programação Avançada".to_string(),
                ects: 6.0,
                avaliacao: vec![componente("Quizzes", 20, 16.0), componente("Projeto", 80, 19.5)],
            },
            Fuc {
                codigo: "03782".to_string(),
                nome: "Dissertação".to_string(),
                ects: 42.0,
                avaliacao: vec![
                    componente("Dissertação", 60, 18.0),
                    componente("Apresentação", 20, 16.5),
                    componente("Discussão", 20, 18.0),
                ],
            },
        ],
    }
}

fn student() -> Student {
    Student {
        number: 20190795,
        name: "Felipe Silva".to_string(),
        age: 30,
        course: "Engenharia Informática".to_string(),
        worker: true,
    }
}

#[test]
fn test_custom_names() {
    let mut xml = XmlTree::new();
    let student = StudentNames {
        number: 121851,
        name: "Felipe Silva".to_string(),
        age: 30,
        course: "Engenharia Informática".to_string(),
        worker: true,
    };
    let node = xml.translate(&student).unwrap();
    assert_eq!(
        xml.to_string(node),
        r#"<estudante>
  <numero>121851</numero>
  <nome>Felipe Silva</nome>
  <idade>30</idade>
  <curso>Engenharia Informática</curso>
  <trabalhador>true</trabalhador>
</estudante>"#
    );
}

#[test]
fn test_ignored_fields() {
    let mut xml = XmlTree::new();
    let student = StudentIgnore {
        number: 121851,
        name: "Felipe Silva".to_string(),
        age: 30,
        course: "Engenharia Informática".to_string(),
        worker: true,
    };
    let node = xml.translate(&student).unwrap();
    assert_eq!(
        xml.to_string(node),
        r#"<student>
  <number>121851</number>
  <name>Felipe Silva</name>
  <course>Engenharia Informática</course>
</student>"#
    );
}

#[test]
fn test_attribute_field_and_type_name() {
    let mut xml = XmlTree::new();
    let node = xml.translate(&student()).unwrap();
    assert_eq!(
        xml.to_string(node),
        r#"<Student number="20190795">
  <name>Felipe Silva</name>
  <age>30</age>
  <course>Engenharia Informática</course>
  <worker>true</worker>
</Student>"#
    );
    assert_eq!(xml.parent(node), None);
}

#[test]
fn test_nested_records() {
    let mut xml = XmlTree::new();
    let node = xml.translate(&plano()).unwrap();
    assert_eq!(
        xml.to_string(node),
        r#"<plano>
  <curso>Mestrado em Engenharia Informática</curso>
  <fuc codigo="M4310">
    <nome>Programação Avançada</nome>
    <ects>6.0</ects>
    <avaliacao>
      <componente nome="Quizzes" peso="20%"/>
      <componente nome="Projeto" peso="80%"/>
    </avaliacao>
  </fuc>
  <fuc codigo="03782">
    <nome>Dissertação</nome>
    <ects>42.0</ects>
    <avaliacao>
      <componente nome="Dissertação" peso="60%"/>
      <componente nome="Apresentação" peso="20%"/>
      <componente nome="Discussão" peso="20%"/>
    </avaliacao>
  </fuc>
</plano>"#
    );
}

#[test]
fn test_translated_tree_can_be_attached() {
    let mut xml = XmlTree::new();
    let doc = xml.new_document();
    let node = xml.translate(&plano()).unwrap();
    xml.add_element(doc, node).unwrap();
    let componentes = xml.xpath(doc, "/plano/fuc/avaliacao/componente");
    assert_eq!(componentes.len(), 5);
    assert_eq!(xml.attribute(componentes[4], "peso"), Some("20%"));
    assert_eq!(xml.count_elements(doc), (10, 5));
}

#[test]
fn test_class_adapter() {
    let mut xml = XmlTree::new();
    let node = xml.translate(&UpperStudent(student())).unwrap();
    assert_eq!(
        xml.to_string(node),
        r#"<STUDENT NUMBER="20190795">
  <NAME>FELIPE SILVA</NAME>
  <AGE>30</AGE>
  <COURSE>ENGENHARIA INFORMÁTICA</COURSE>
  <WORKER>TRUE</WORKER>
</STUDENT>"#
    );
}

struct Turma {
    nome: String,
    alunos: Vec<UpperStudent>,
}

impl Record for Turma {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Turma>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("turma")
                .field("nome", |t| (&t.nome).into())
                .field("alunos", |t| (&t.alunos).into())
        })
    }
}

#[test]
fn test_class_adapter_not_applied_to_nested_records() {
    let mut xml = XmlTree::new();
    let turma = Turma {
        nome: "MEI".to_string(),
        alunos: vec![UpperStudent(student())],
    };
    let node = xml.translate(&turma).unwrap();
    assert_eq!(
        xml.to_string(node),
        r#"<turma>
  <nome>MEI</nome>
  <student number="20190795">
    <name>Felipe Silva</name>
    <age>30</age>
    <course>Engenharia Informática</course>
    <worker>true</worker>
  </student>
</turma>"#
    );
}

struct Nota {
    valor: Option<i32>,
    texto: String,
}

impl Record for Nota {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Nota>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("nota")
                .field_with("texto", &[Directive::Attribute], |n| (&n.texto).into())
                .field_with(
                    "valor",
                    &[Directive::Convert(Converter::of::<Percentage>())],
                    |n| n.valor.into(),
                )
        })
    }
}

#[test]
fn test_missing_value_with_converter() {
    let mut xml = XmlTree::new();
    let nota = Nota {
        valor: None,
        texto: "final".to_string(),
    };
    let err = xml.translate(&nota).unwrap_err();
    assert!(matches!(err, Error::ConversionFailure { ref name, .. } if name == "valor"));

    let nota = Nota {
        valor: Some(20),
        texto: "final".to_string(),
    };
    let node = xml.translate(&nota).unwrap();
    assert_eq!(
        xml.to_string(node),
        "<nota texto=\"final\">\n  <valor>20%</valor>\n</nota>"
    );
}

struct Peso(String);

impl Record for Peso {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Peso>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new().name("peso").field_with(
                "peso",
                &[Directive::Convert(Converter::of::<Percentage>())],
                |p| (&p.0).into(),
            )
        })
    }
}

#[rstest]
#[case("vinte")]
#[case("20")]
fn test_converter_rejects_text(#[case] peso: &str) {
    let mut xml = XmlTree::new();
    let err = xml.translate(&Peso(peso.to_string())).unwrap_err();
    assert!(matches!(err, Error::ConversionFailure { .. }));
}

struct Bad;

impl Record for Bad {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Bad>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| RecordDescriptor::<Self>::new().field("1st", |_| "x".into()))
    }
}

struct Holder(Vec<Bad>);

impl Record for Holder {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Holder>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .field("label", |_| "ok".into())
                .field("items", |h| (&h.0).into())
        })
    }
}

#[test]
fn test_invalid_field_name_in_nested_record() {
    let mut xml = XmlTree::new();
    let result = xml.translate(&Holder(vec![Bad]));
    assert!(matches!(result, Err(Error::InvalidName(_))));
    // an empty list never reaches the invalid field
    let node = xml.translate(&Holder(Vec::new())).unwrap();
    assert_eq!(xml.to_string(node), "<Holder>\n  <label>ok</label>\n</Holder>");
}

#[test]
fn test_missing_value_without_converter() {
    let mut xml = XmlTree::new();
    struct Opcional(Option<f64>);
    impl Record for Opcional {
        fn descriptor() -> &'static RecordDescriptor<Self> {
            static DESCRIPTOR: OnceLock<RecordDescriptor<Opcional>> = OnceLock::new();
            DESCRIPTOR.get_or_init(|| {
                RecordDescriptor::<Self>::new()
                    .name("opcional")
                    .field("valor", |o| o.0.into())
            })
        }
    }
    let node = xml.translate(&Opcional(None)).unwrap();
    assert_eq!(
        xml.to_string(node),
        "<opcional>\n  <valor>null</valor>\n</opcional>"
    );
    let node = xml.translate(&Opcional(Some(2.0))).unwrap();
    assert_eq!(
        xml.to_string(node),
        "<opcional>\n  <valor>2.0</valor>\n</opcional>"
    );
}

#[derive(Default)]
struct Failing;

impl StringAdapter for Failing {
    fn transform(&self, value: &str) -> Result<String, BoxError> {
        Err(format!("cannot adapt {}", value).into())
    }
}

#[test]
fn test_adapter_failure() {
    struct Adapted(i32);
    impl Record for Adapted {
        fn descriptor() -> &'static RecordDescriptor<Self> {
            static DESCRIPTOR: OnceLock<RecordDescriptor<Adapted>> = OnceLock::new();
            DESCRIPTOR.get_or_init(|| {
                RecordDescriptor::<Self>::new()
                    .adapter::<Failing>()
                    .field("valor", |a| a.0.into())
            })
        }
    }
    let mut xml = XmlTree::new();
    let err = xml.translate(&Adapted(1)).unwrap_err();
    assert!(matches!(err, Error::ConversionFailure { ref name, .. } if name == "Adapted"));
}

#[test]
fn test_field_value_from_record() {
    let plano = plano();
    let descriptor = Plano::descriptor();
    let fields = descriptor.fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[1].xml_name(), "fucs");
    match fields[1].value(&plano) {
        FieldValue::Records(records) => assert_eq!(records.len(), 2),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(Student::descriptor().xml_name().unwrap(), "Student");
}

struct Avaliacao {
    peso: f32,
    nota: f32,
}

impl Record for Avaliacao {
    fn descriptor() -> &'static RecordDescriptor<Self> {
        static DESCRIPTOR: OnceLock<RecordDescriptor<Avaliacao>> = OnceLock::new();
        DESCRIPTOR.get_or_init(|| {
            RecordDescriptor::<Self>::new()
                .name("avaliacao")
                .field_with(
                    "peso",
                    &[
                        Directive::Attribute,
                        Directive::Convert(Converter::of::<Percentage>()),
                    ],
                    |a| a.peso.into(),
                )
                .field("nota", |a| a.nota.into())
        })
    }
}

#[test]
fn test_f32_fields_keep_their_own_digits() {
    let mut xml = XmlTree::new();
    let avaliacao = Avaliacao {
        peso: 0.1,
        nota: 16.0,
    };
    let node = xml.translate(&avaliacao).unwrap();
    assert_eq!(
        xml.to_string(node),
        "<avaliacao peso=\"0.1%\">\n  <nota>16.0</nota>\n</avaliacao>"
    );
}
