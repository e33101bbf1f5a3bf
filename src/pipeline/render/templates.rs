//! Localized panel templates.
//!
//! Every language carries the same record shape; adding a language is a new
//! `PanelTemplate` value plus one arm in `template_for`.

use crate::models::{HypoWindow, Language, PkClass};

/// Fixed text of one template family.
pub struct PanelTemplate {
    pub language: Language,
    pub aria_label: &'static str,
    pub title: &'static str,
    pub intro: &'static str,

    pub onset_label: &'static str,
    pub peak_label: &'static str,
    pub duration_label: &'static str,
    pub default_onset: &'static str,
    pub default_peak: &'static str,
    pub default_duration: &'static str,

    pub increase_title: &'static str,
    pub default_increase: &'static [&'static str],
    pub decrease_title: &'static str,
    pub default_decrease: &'static [&'static str],

    pub symptoms_title: &'static str,
    pub symptoms_text: &'static str,
    pub emergency_title: &'static str,
    pub emergency_steps: &'static [&'static str],
    pub disclaimer: &'static str,

    pub rapid_acting_label: &'static str,
    pub long_acting_label: &'static str,
    pub other_insulin_label: &'static str,
    /// Sentence stating the hypoglycaemia window, hours as pre-formatted text.
    pub window_sentence: fn(start: &str, end: &str) -> String,
    pub decimal_separator: char,
}

impl PanelTemplate {
    pub fn class_label(&self, class: PkClass) -> &'static str {
        match class {
            PkClass::RapidActing => self.rapid_acting_label,
            PkClass::LongActing => self.long_acting_label,
            PkClass::Other => self.other_insulin_label,
        }
    }

    /// Localized window sentence with one decimal place.
    pub fn describe_window(&self, window: &HypoWindow) -> String {
        let start = self.one_decimal(window.start);
        let end = self.one_decimal(window.end);
        (self.window_sentence)(&start, &end)
    }

    fn one_decimal(&self, value: f64) -> String {
        // Half away from zero, so 0.25 reads as 0.3.
        let rounded = (value * 10.0).round() / 10.0;
        let formatted = format!("{rounded:.1}");
        if self.decimal_separator == '.' {
            formatted
        } else {
            formatted.replace('.', &self.decimal_separator.to_string())
        }
    }
}

/// Template family for a resolved language.
pub fn template_for(language: Language) -> &'static PanelTemplate {
    match language {
        Language::English => &ENGLISH,
        Language::Portuguese => &PORTUGUESE,
        Language::Spanish => &SPANISH,
        Language::Danish => &DANISH,
    }
}

// ═══════════════════════════════════════════════════════════
// English (default)
// ═══════════════════════════════════════════════════════════

pub static ENGLISH: PanelTemplate = PanelTemplate {
    language: Language::English,
    aria_label: "DiaLens hypoglycaemia risk summary",
    title: "Hypoglycaemia risk and your insulin",
    intro: "Insulin lowers your blood sugar. Knowing when your insulin works hardest \
            helps you recognise and prevent low blood sugar (hypoglycaemia).",

    onset_label: "Onset",
    peak_label: "Peak",
    duration_label: "Duration",
    default_onset: "Check your package leaflet for when this insulin starts to work.",
    default_peak: "Check your package leaflet for when this insulin has its strongest effect.",
    default_duration: "Check your package leaflet for how long this insulin keeps working.",

    increase_title: "Situations that increase low sugar risk",
    default_increase: &[
        "Skipping or delaying a meal after the injection",
        "Unexpected or intense physical activity",
        "Taking more insulin than prescribed",
        "Drinking alcohol, especially on an empty stomach",
        "Kidney or liver problems",
    ],
    decrease_title: "Situations that may reduce insulin effect",
    default_decrease: &[
        "Infection, fever or acute illness",
        "Stress or corticosteroid medicines",
        "Taking less insulin than prescribed",
        "Very high carbohydrate intake without dose adjustment",
    ],

    symptoms_title: "Signs of low blood sugar",
    symptoms_text: "Shaking, sweating, a fast heartbeat, hunger, headache, blurred vision, \
                    confusion or unusual behaviour can be signs of hypoglycaemia. \
                    Symptoms can develop quickly.",
    emergency_title: "If you think you are having hypoglycaemia",
    emergency_steps: &[
        "Check your blood glucose if you can.",
        "If low and you feel symptoms (shaky, sweaty, confused, very hungry), take \
         fast-acting carbohydrates – for example glucose tablets, sugary drink or juice – \
         as described in your personal plan.",
        "Re-check after about 15 minutes and repeat fast-acting carbohydrates if still low.",
        "Once better, eat a snack or meal that contains longer-acting carbohydrates.",
        "If symptoms are severe, you pass out, or you cannot swallow safely, another person \
         should call emergency services immediately and follow your doctor’s instructions \
         (for example, glucagon injection).",
    ],
    disclaimer: "This DiaLens summary is an educational aid. It does not replace your \
                 medicine’s package leaflet or advice from your healthcare professional.",

    rapid_acting_label: "rapid acting insulin",
    long_acting_label: "long acting insulin",
    other_insulin_label: "insulin",
    window_sentence: english_window,
    decimal_separator: '.',
};

fn english_window(start: &str, end: &str) -> String {
    format!(
        "You are most likely to feel low sugar symptoms roughly between {start}–{end} h \
         after this dose, especially if you eat less than usual or exercise more."
    )
}

// ═══════════════════════════════════════════════════════════
// Portuguese
// ═══════════════════════════════════════════════════════════

pub static PORTUGUESE: PanelTemplate = PanelTemplate {
    language: Language::Portuguese,
    aria_label: "Resumo DiaLens do risco de hipoglicemia",
    title: "Risco de hipoglicemia e a sua insulina",
    intro: "A insulina baixa o açúcar no sangue. Saber quando a sua insulina atua com \
            mais força ajuda a reconhecer e a prevenir o açúcar baixo no sangue (hipoglicemia).",

    onset_label: "Início de ação",
    peak_label: "Pico",
    duration_label: "Duração",
    default_onset: "Consulte o folheto informativo para saber quando esta insulina começa a atuar.",
    default_peak: "Consulte o folheto informativo para saber quando esta insulina tem o efeito mais forte.",
    default_duration: "Consulte o folheto informativo para saber durante quanto tempo esta insulina atua.",

    increase_title: "Situações que aumentam o risco de açúcar baixo",
    default_increase: &[
        "Saltar ou atrasar uma refeição após a injeção",
        "Atividade física inesperada ou intensa",
        "Administrar mais insulina do que a prescrita",
        "Consumo de álcool, sobretudo em jejum",
        "Problemas de rins ou de fígado",
    ],
    decrease_title: "Situações que podem reduzir o efeito da insulina",
    default_decrease: &[
        "Infeção, febre ou doença aguda",
        "Stress ou medicamentos corticosteroides",
        "Administrar menos insulina do que a prescrita",
        "Ingestão muito elevada de hidratos de carbono sem ajustar a dose",
    ],

    symptoms_title: "Sinais de açúcar baixo no sangue",
    symptoms_text: "Tremores, suores, batimento cardíaco acelerado, fome, dor de cabeça, \
                    visão turva, confusão ou comportamento invulgar podem ser sinais de \
                    hipoglicemia. Os sintomas podem surgir rapidamente.",
    emergency_title: "Se pensa que está com uma hipoglicemia",
    emergency_steps: &[
        "Meça a glicemia, se puder.",
        "Se estiver baixa e tiver sintomas (tremores, suores, confusão, muita fome), tome \
         hidratos de carbono de ação rápida – por exemplo comprimidos de glucose, uma bebida \
         açucarada ou sumo – conforme o seu plano pessoal.",
        "Volte a medir após cerca de 15 minutos e repita se continuar baixa.",
        "Quando se sentir melhor, coma um lanche ou uma refeição com hidratos de carbono \
         de absorção lenta.",
        "Se os sintomas forem graves, se perder a consciência ou não conseguir engolir em \
         segurança, outra pessoa deve ligar de imediato para os serviços de emergência e \
         seguir as instruções do seu médico (por exemplo, injeção de glucagom).",
    ],
    disclaimer: "Este resumo DiaLens é um auxiliar educativo. Não substitui o folheto \
                 informativo do seu medicamento nem o aconselhamento do seu profissional de saúde.",

    rapid_acting_label: "insulina de ação rápida",
    long_acting_label: "insulina de ação prolongada",
    other_insulin_label: "insulina",
    window_sentence: portuguese_window,
    decimal_separator: ',',
};

fn portuguese_window(start: &str, end: &str) -> String {
    format!(
        "É mais provável sentir sintomas de açúcar baixo entre cerca de {start}–{end} h \
         após esta dose, sobretudo se comer menos do que o habitual ou fizer mais exercício."
    )
}

// ═══════════════════════════════════════════════════════════
// Spanish
// ═══════════════════════════════════════════════════════════

pub static SPANISH: PanelTemplate = PanelTemplate {
    language: Language::Spanish,
    aria_label: "Resumen DiaLens del riesgo de hipoglucemia",
    title: "Riesgo de hipoglucemia y su insulina",
    intro: "La insulina reduce el azúcar en sangre. Saber cuándo actúa con más fuerza su \
            insulina le ayuda a reconocer y prevenir el azúcar bajo en sangre (hipoglucemia).",

    onset_label: "Inicio",
    peak_label: "Pico",
    duration_label: "Duración",
    default_onset: "Consulte el prospecto para saber cuándo empieza a actuar esta insulina.",
    default_peak: "Consulte el prospecto para saber cuándo alcanza esta insulina su efecto máximo.",
    default_duration: "Consulte el prospecto para saber cuánto tiempo sigue actuando esta insulina.",

    increase_title: "Situaciones que aumentan el riesgo de azúcar bajo",
    default_increase: &[
        "Saltarse o retrasar una comida después de la inyección",
        "Actividad física inesperada o intensa",
        "Administrarse más insulina de la prescrita",
        "Consumo de alcohol, sobre todo en ayunas",
        "Problemas de riñón o de hígado",
    ],
    decrease_title: "Situaciones que pueden reducir el efecto de la insulina",
    default_decrease: &[
        "Infección, fiebre o enfermedad aguda",
        "Estrés o medicamentos corticosteroides",
        "Administrarse menos insulina de la prescrita",
        "Ingesta muy alta de hidratos de carbono sin ajustar la dosis",
    ],

    symptoms_title: "Señales de azúcar bajo en sangre",
    symptoms_text: "Temblores, sudoración, latidos rápidos, hambre, dolor de cabeza, visión \
                    borrosa, confusión o un comportamiento inusual pueden ser señales de \
                    hipoglucemia. Los síntomas pueden aparecer rápidamente.",
    emergency_title: "Si cree que tiene una hipoglucemia",
    emergency_steps: &[
        "Mida su glucosa en sangre si puede.",
        "Si está baja y tiene síntomas (temblores, sudor, confusión, mucha hambre), tome \
         hidratos de carbono de acción rápida – por ejemplo comprimidos de glucosa, una bebida \
         azucarada o zumo – según su plan personal.",
        "Vuelva a medir al cabo de unos 15 minutos y repita si sigue baja.",
        "Cuando se encuentre mejor, tome un tentempié o una comida con hidratos de carbono \
         de absorción lenta.",
        "Si los síntomas son graves, pierde el conocimiento o no puede tragar con seguridad, \
         otra persona debe llamar de inmediato a los servicios de emergencia y seguir las \
         instrucciones de su médico (por ejemplo, inyección de glucagón).",
    ],
    disclaimer: "Este resumen de DiaLens es una ayuda educativa. No sustituye al prospecto \
                 de su medicamento ni al consejo de su profesional sanitario.",

    rapid_acting_label: "insulina de acción rápida",
    long_acting_label: "insulina de acción prolongada",
    other_insulin_label: "insulina",
    window_sentence: spanish_window,
    decimal_separator: ',',
};

fn spanish_window(start: &str, end: &str) -> String {
    format!(
        "Es más probable que note síntomas de azúcar bajo aproximadamente entre \
         {start}–{end} h después de esta dosis, sobre todo si come menos de lo habitual \
         o hace más ejercicio."
    )
}

// ═══════════════════════════════════════════════════════════
// Danish
// ═══════════════════════════════════════════════════════════

pub static DANISH: PanelTemplate = PanelTemplate {
    language: Language::Danish,
    aria_label: "DiaLens-resumé af risikoen for hypoglykæmi",
    title: "Risiko for hypoglykæmi og din insulin",
    intro: "Insulin sænker dit blodsukker. Når du ved, hvornår din insulin virker kraftigst, \
            er det lettere at genkende og forebygge lavt blodsukker (hypoglykæmi).",

    onset_label: "Virkningsstart",
    peak_label: "Maksimal virkning",
    duration_label: "Virkningsvarighed",
    default_onset: "Se indlægssedlen for, hvornår denne insulin begynder at virke.",
    default_peak: "Se indlægssedlen for, hvornår denne insulin virker kraftigst.",
    default_duration: "Se indlægssedlen for, hvor længe denne insulin virker.",

    increase_title: "Situationer, der øger risikoen for lavt blodsukker",
    default_increase: &[
        "At springe et måltid over eller udskyde det efter injektionen",
        "Uventet eller hård fysisk aktivitet",
        "At tage mere insulin end ordineret",
        "Alkohol, især på tom mave",
        "Nyre- eller leverproblemer",
    ],
    decrease_title: "Situationer, der kan nedsætte insulinens virkning",
    default_decrease: &[
        "Infektion, feber eller akut sygdom",
        "Stress eller binyrebarkhormon (kortikosteroider)",
        "At tage mindre insulin end ordineret",
        "Meget stort kulhydratindtag uden justering af dosis",
    ],

    symptoms_title: "Tegn på lavt blodsukker",
    symptoms_text: "Rysten, sveden, hurtig puls, sult, hovedpine, sløret syn, forvirring \
                    eller usædvanlig adfærd kan være tegn på hypoglykæmi. Symptomerne kan \
                    opstå hurtigt.",
    emergency_title: "Hvis du tror, du har hypoglykæmi",
    emergency_steps: &[
        "Mål dit blodsukker, hvis du kan.",
        "Hvis det er lavt, og du har symptomer (rysten, sveden, forvirring, stærk sult), så \
         tag hurtigtvirkende kulhydrater – for eksempel druesukkertabletter, sukkerholdig \
         sodavand eller juice – som beskrevet i din personlige plan.",
        "Mål igen efter ca. 15 minutter, og gentag, hvis det stadig er lavt.",
        "Når du har det bedre, så spis et mellemmåltid eller et måltid med langsomt \
         virkende kulhydrater.",
        "Hvis symptomerne er alvorlige, du mister bevidstheden eller ikke kan synke sikkert, \
         skal en anden person straks ringe 112 og følge lægens anvisninger \
         (for eksempel en glukagoninjektion).",
    ],
    disclaimer: "Dette DiaLens-resumé er et undervisningsmateriale. Det erstatter ikke din \
                 medicins indlægsseddel eller råd fra din sundhedsperson.",

    rapid_acting_label: "hurtigtvirkende insulin",
    long_acting_label: "langtidsvirkende insulin",
    other_insulin_label: "insulin",
    window_sentence: danish_window,
    decimal_separator: ',',
};

fn danish_window(start: &str, end: &str) -> String {
    format!(
        "Du vil sandsynligvis mærke symptomer på lavt blodsukker cirka {start}–{end} timer \
         efter denne dosis, især hvis du spiser mindre end normalt eller motionerer mere."
    )
}
