//! Dataset names and column layouts.
//!
//! The column order here is the order written to the row store. Reads are
//! conformed to these lists, so a dataset that is missing a column still
//! yields every name below (backfilled with empty values).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Default dataset name for participant registrations.
pub const PARTICIPANTS_DATASET: &str = "PARTICIPANTES";
/// Default dataset name for companion registrations.
pub const COMPANIONS_DATASET: &str = "ACOMPANANTES";
/// Default dataset name for the reconciliation output.
pub const RECONCILIATION_DATASET: &str = "UNIFICADO";

pub mod participant {
    pub const TIMESTAMP: &str = "timestamp";
    pub const IS_ADULT: &str = "es_mayor_edad";
    pub const DOCUMENT: &str = "documento_participante";
    pub const FULL_NAME: &str = "nombre_completo";
    pub const CONTACT_DOCUMENT: &str = "documento_contacto";
    pub const GUARDIAN_NAME: &str = "nombre_acudiente";
    pub const DOCUMENT_FILE_URL: &str = "archivo_doc_participante";
}

pub mod companion {
    pub const TIMESTAMP: &str = "timestamp";
    pub const DOCUMENT: &str = "documento_acompanante";
    pub const NAME: &str = "nombre_acompanante";
    pub const CONSENT_FILE_URL: &str = "archivo_lista_menores_url";
    pub const MINOR_DOCUMENTS_TEXT: &str = "lista_documentos_menores_texto";
}

pub mod reconciliation {
    pub const PARTICIPANT_DOCUMENT: &str = "documento_participante";
    pub const FULL_NAME: &str = "nombre_completo";
    pub const IS_ADULT: &str = "es_mayor_edad";
    pub const DECLARED_GUARDIAN: &str = "documento_acudiente_declarado";
    pub const GUARDIAN_MATCH: &str = "match_acudiente_en_form";
    pub const COMPANION_DOCUMENT: &str = "documento_acompanante_real";
    pub const COMPANION_NAME: &str = "nombre_acompanante_real";
    pub const HAS_CONSENT_FILE: &str = "tiene_archivo_consentimiento";
    pub const LIST_CONTAINS_PARTICIPANT: &str = "consentimiento_lista_contiene_doc_participante";
    pub const OBSERVATIONS: &str = "observaciones";
}

pub const PARTICIPANT_COLUMNS: &[&str] = &[
    "timestamp",
    "es_mayor_edad",
    "tipo_documento_participante",
    "documento_participante",
    "nombre_completo",
    "como_te_gusta_que_te_digan",
    "telefono_celular",
    "correo",
    "fecha_nacimiento",
    "edad_aprox",
    "eps",
    "restricciones_alimentarias",
    "salud_mental",
    "region",
    "obra_institucion",
    "proceso_juvenil",
    "intereses_personales",
    "experiencia_significativa",
    "dato_freak",
    "pregunta_para_conectar",
    "exp_servicio_rank",
    "exp_peregrinaje_rank",
    "exp_cultura_arte_rank",
    "exp_espiritualidad_rank",
    "exp_vocacion_rank",
    "exp_incidencia_politica_rank",
    "experiencia_top_calculada",
    "perfil_cercania",
    "motivo_experiencia_top",
    "preguntas_frecuentes",
    "ha_vivido_acompanamiento",
    "acompanamiento_parcerxs",
    "acompanamiento_familia",
    "acompanamiento_mentoria",
    "acompanamiento_espiritual",
    "acompanamiento_emocional",
    "conoce_rji",
    "tipo_documento_acudiente",
    "documento_contacto",
    "nombre_acudiente",
    "correo_acudiente",
    "telefono_acudiente",
    "acepta_tratamiento_datos",
    "archivo_doc_participante",
];

pub const COMPANION_COLUMNS: &[&str] = &[
    "timestamp",
    "tipo_documento_acompanante",
    "documento_acompanante",
    "nombre_acompanante",
    "correo_acompanante",
    "telefono_acompanante",
    "organizacion",
    "region",
    "rol_en_organizacion",
    "delegacion_que_acompana",
    "tamano_delegacion",
    "medio_de_viaje",
    "trae_varios_jovenes",
    "experiencias_niveladas",
    "ciudad_origen",
    "hora_llegada_medellin",
    "archivo_lista_menores_url",
    "lista_documentos_menores_texto",
];

pub const RECONCILIATION_COLUMNS: &[&str] = &[
    reconciliation::PARTICIPANT_DOCUMENT,
    reconciliation::FULL_NAME,
    reconciliation::IS_ADULT,
    reconciliation::DECLARED_GUARDIAN,
    reconciliation::GUARDIAN_MATCH,
    reconciliation::COMPANION_DOCUMENT,
    reconciliation::COMPANION_NAME,
    reconciliation::HAS_CONSENT_FILE,
    reconciliation::LIST_CONTAINS_PARTICIPANT,
    reconciliation::OBSERVATIONS,
];

/// The three datasets kept in the row store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetKind {
    Participants,
    Companions,
    Reconciliation,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Participants,
        DatasetKind::Companions,
        DatasetKind::Reconciliation,
    ];

    /// Default dataset name in the row store.
    pub fn default_name(self) -> &'static str {
        match self {
            DatasetKind::Participants => PARTICIPANTS_DATASET,
            DatasetKind::Companions => COMPANIONS_DATASET,
            DatasetKind::Reconciliation => RECONCILIATION_DATASET,
        }
    }

    pub fn columns(self) -> &'static [&'static str] {
        match self {
            DatasetKind::Participants => PARTICIPANT_COLUMNS,
            DatasetKind::Companions => COMPANION_COLUMNS,
            DatasetKind::Reconciliation => RECONCILIATION_COLUMNS,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetKind::Participants => "participants",
            DatasetKind::Companions => "companions",
            DatasetKind::Reconciliation => "reconciliation",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "participants" | "participant" | "participantes" => Ok(DatasetKind::Participants),
            "companions" | "companion" | "acompanantes" => Ok(DatasetKind::Companions),
            "reconciliation" | "unificado" => Ok(DatasetKind::Reconciliation),
            _ => Err(ModelError::UnknownDataset(s.to_string())),
        }
    }
}

/// Dataset names used in a particular row store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetNames {
    pub participants: String,
    pub companions: String,
    pub reconciliation: String,
}

impl Default for DatasetNames {
    fn default() -> Self {
        Self {
            participants: PARTICIPANTS_DATASET.to_string(),
            companions: COMPANIONS_DATASET.to_string(),
            reconciliation: RECONCILIATION_DATASET.to_string(),
        }
    }
}

impl DatasetNames {
    pub fn name(&self, kind: DatasetKind) -> &str {
        match kind {
            DatasetKind::Participants => &self.participants,
            DatasetKind::Companions => &self.companions,
            DatasetKind::Reconciliation => &self.reconciliation,
        }
    }
}
