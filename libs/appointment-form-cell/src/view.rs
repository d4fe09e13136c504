use crate::form::FormState;
use crate::models::Field;

pub const FORM_TITLE: &str = "Crear Nueva Cita";
pub const SUBMIT_LABEL: &str = "Crear Cita";
pub const PATIENT_LOADING: &str = "Cargando...";
pub const PHYSICIAN_PLACEHOLDER: &str = "Selecciona un médico";

/// What the component renders: either the restricted-access notice or the
/// form body. This is the markup analogue; the host shell decides how to
/// paint it.
#[derive(Debug)]
pub enum FormView {
    Restricted { notice: String },
    Form(FormBody),
}

#[derive(Debug)]
pub struct FormBody {
    pub title: String,
    pub fields: Vec<FieldView>,
    pub submit_label: String,
}

impl FormBody {
    pub fn field(&self, field: Field) -> Option<&FieldView> {
        self.fields.iter().find(|f| f.field == field)
    }
}

#[derive(Debug)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub control: Control,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Control {
    Date,
    Time,
    Number,
    Text,
    /// Disabled display-only proxy; the real value travels in a hidden field.
    ReadOnly,
    Hidden,
    Select {
        placeholder: Option<String>,
        options: Vec<SelectOption>,
    },
}

#[derive(Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Builds the form body from the current state. Field order and labels match
/// what the backend's web client has always shown.
pub fn form_body(state: &FormState) -> FormBody {
    let patient_display = state
        .patient
        .as_ref()
        .map(|p| p.full_name())
        .unwrap_or_else(|| PATIENT_LOADING.to_string());

    let physician_options = state
        .physicians
        .iter()
        .map(|m| SelectOption {
            value: m.id.clone(),
            label: m.display_label(),
        })
        .collect();

    let status_options = vec![
        SelectOption {
            value: "pendiente".to_string(),
            label: "Pendiente".to_string(),
        },
        SelectOption {
            value: "confirmada".to_string(),
            label: "Confirmada".to_string(),
        },
        SelectOption {
            value: "cancelada".to_string(),
            label: "Cancelada".to_string(),
        },
    ];

    let fields = vec![
        FieldView {
            field: Field::Date,
            label: "Fecha",
            control: Control::Date,
            value: state.values.date.clone(),
            error: state.error(Field::Date).map(str::to_string),
        },
        FieldView {
            field: Field::Time,
            label: "Hora",
            control: Control::Time,
            value: state.values.time.clone(),
            error: state.error(Field::Time).map(str::to_string),
        },
        // The visible patient field only displays the fetched name; the
        // identifier that actually submits rides in the hidden field below.
        FieldView {
            field: Field::PatientId,
            label: "Paciente",
            control: Control::ReadOnly,
            value: patient_display,
            error: state.error(Field::PatientId).map(str::to_string),
        },
        FieldView {
            field: Field::PatientId,
            label: "Paciente",
            control: Control::Hidden,
            value: state.values.patient_id.clone(),
            error: None,
        },
        FieldView {
            field: Field::PhysicianId,
            label: "Médico",
            control: Control::Select {
                placeholder: Some(PHYSICIAN_PLACEHOLDER.to_string()),
                options: physician_options,
            },
            value: state.values.physician_id.clone(),
            error: state.error(Field::PhysicianId).map(str::to_string),
        },
        FieldView {
            field: Field::Status,
            label: "Estado",
            control: Control::Select {
                placeholder: None,
                options: status_options,
            },
            value: state.values.status.as_wire().to_string(),
            error: state.error(Field::Status).map(str::to_string),
        },
        FieldView {
            field: Field::BloodPressure,
            label: "Presión Arterial",
            control: Control::Number,
            value: state.values.blood_pressure.clone(),
            error: state.error(Field::BloodPressure).map(str::to_string),
        },
        FieldView {
            field: Field::Temperature,
            label: "Temperatura",
            control: Control::Number,
            value: state.values.temperature.clone(),
            error: state.error(Field::Temperature).map(str::to_string),
        },
        FieldView {
            field: Field::Studies,
            label: "Estudios",
            control: Control::Text,
            value: state.values.studies.clone(),
            error: state.error(Field::Studies).map(str::to_string),
        },
        FieldView {
            field: Field::Notes,
            label: "Observaciones",
            control: Control::Text,
            value: state.values.notes.clone(),
            error: state.error(Field::Notes).map(str::to_string),
        },
    ];

    FormBody {
        title: FORM_TITLE.to_string(),
        fields,
        submit_label: SUBMIT_LABEL.to_string(),
    }
}
