use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::model::InflectedForms;
use crate::morphology::{
    ClauseStatus, DiscourseFunction, Form, Gender, Inflection, InterrogativeType, NumberAgreement,
    Person, Tense,
};
use crate::node::Node;

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// Untyped value for features the realiser does not read.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum FeatureValue {
    Bool(bool),
    Int(i64),
    Text(String),
    Node(Box<Node>),
    Nodes(Vec<Node>),
}

/// Feature bag of a node.
///
/// Every feature the realiser consumes has its own typed field; `None` means
/// "use the documented default". Anything else a builder attaches lives in
/// `extra` and is carried through untouched.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Features {
    pub tense: Option<Tense>,
    pub form: Option<Form>,
    pub number: Option<NumberAgreement>,
    pub person: Option<Person>,
    pub gender: Option<Gender>,
    pub modal: Option<String>,
    pub interrogative_type: Option<InterrogativeType>,
    pub discourse_function: Option<DiscourseFunction>,
    pub clause_status: Option<ClauseStatus>,
    pub inflection: Option<Inflection>,
    pub particle: Option<String>,
    pub conjunction: Option<String>,
    pub conjunction_type: Option<String>,

    pub passive: Option<bool>,
    pub perfect: Option<bool>,
    pub progressive: Option<bool>,
    pub negated: Option<bool>,
    pub possessive: Option<bool>,
    pub reflexive: Option<bool>,
    pub elided: Option<bool>,
    pub pronominal: Option<bool>,
    pub proper: Option<bool>,
    pub acronym: Option<bool>,
    pub appositive: Option<bool>,
    pub expletive_subject: Option<bool>,
    pub comparative: Option<bool>,
    pub superlative: Option<bool>,
    pub adjective_ordering: Option<bool>,
    pub suppressed_complementiser: Option<bool>,
    pub suppress_genitive_in_gerund: Option<bool>,
    pub raise_specifier: Option<bool>,
    pub aggregate_auxiliary: Option<bool>,

    // Set by the realiser itself.
    pub raised: Option<bool>,
    pub non_morph: Option<bool>,
    pub realise_auxiliary: Option<bool>,
    pub complement_agreement: Option<bool>,
    pub interrogative: Option<bool>,

    /// Per-use surface forms; they win over the lexicon's.
    pub forms: InflectedForms,
    pub extra: BTreeMap<String, FeatureValue>,
}

macro_rules! flag_accessors {
    ($($field:ident => $getter:ident),+ $(,)?) => {
        impl Features {
            $(
                #[inline]
                pub fn $getter(&self) -> bool {
                    self.$field.unwrap_or(false)
                }
            )+
        }
    };
}

flag_accessors!(
    passive => is_passive,
    perfect => is_perfect,
    progressive => is_progressive,
    negated => is_negated,
    possessive => is_possessive,
    reflexive => is_reflexive,
    elided => is_elided,
    pronominal => is_pronominal,
    proper => is_proper,
    acronym => is_acronym,
    appositive => is_appositive,
    expletive_subject => is_expletive_subject,
    comparative => is_comparative,
    superlative => is_superlative,
    suppressed_complementiser => is_complementiser_suppressed,
    suppress_genitive_in_gerund => is_genitive_suppressed_in_gerund,
    raise_specifier => raises_specifier,
    aggregate_auxiliary => aggregates_auxiliary,
    raised => is_raised,
    non_morph => is_non_morph,
    complement_agreement => agrees_with_complement,
    interrogative => is_interrogative,
);

impl Features {
    pub const EMPTY: Features = Features {
        tense: None,
        form: None,
        number: None,
        person: None,
        gender: None,
        modal: None,
        interrogative_type: None,
        discourse_function: None,
        clause_status: None,
        inflection: None,
        particle: None,
        conjunction: None,
        conjunction_type: None,
        passive: None,
        perfect: None,
        progressive: None,
        negated: None,
        possessive: None,
        reflexive: None,
        elided: None,
        pronominal: None,
        proper: None,
        acronym: None,
        appositive: None,
        expletive_subject: None,
        comparative: None,
        superlative: None,
        adjective_ordering: None,
        suppressed_complementiser: None,
        suppress_genitive_in_gerund: None,
        raise_specifier: None,
        aggregate_auxiliary: None,
        raised: None,
        non_morph: None,
        realise_auxiliary: None,
        complement_agreement: None,
        interrogative: None,
        forms: InflectedForms {
            plural: None,
            past: None,
            past_participle: None,
            present_participle: None,
            present3s: None,
            comparative: None,
            superlative: None,
        },
        extra: BTreeMap::new(),
    };

    pub fn is_plural(&self) -> bool {
        self.number == Some(NumberAgreement::Plural)
    }

    /// Auxiliaries are realised unless a coordination switched them off.
    pub fn realises_auxiliary(&self) -> bool {
        self.realise_auxiliary.unwrap_or(true)
    }

    pub fn form_or_normal(&self) -> Form {
        self.form.unwrap_or(Form::Normal)
    }

    pub fn has_form(&self, form: Form) -> bool {
        self.form == Some(form)
    }
}
