/// Number of work items kept when a single role is requested
pub const SINGLE_ROLE_QUOTA: usize = 2;

/// Default freelance name used by the niche and legal status templates
pub const DEFAULT_NAME: &str = "Freelance";

/// Default freelance name used inside the LinkedIn bio template
pub const DEFAULT_NAME_BIO: &str = "le freelance";

/// Default main objective when the profile does not state one
pub const DEFAULT_OBJECTIVE: &str = "Lancer mon activité";

/// Default monthly income target in euros
pub const DEFAULT_TARGET_INCOME: f64 = 4000.0;

/// Ratio between the monthly turnover to simulate and the income target
pub const TURNOVER_RATIO: f64 = 1.3;

/// Default sector used by the visibility channels template
pub const DEFAULT_SECTOR_CHANNELS: &str = "tech";

/// Prefix of the text returned to the user when an execution fails
pub const EXECUTION_ERROR_PREFIX: &str = "Erreur lors de l'exécution: ";

/// Role title of the positioning agent
pub const POSITIONING_ROLE_NAME: &str = "Expert en Positionnement et Marketing Freelance";

/// Goal of the positioning agent
pub const POSITIONING_GOAL: &str = "Aider le freelance à clarifier sa cible, son offre et à se différencier dans un marché concurrentiel";

/// Backstory of the positioning agent
pub const POSITIONING_BACKSTORY: &str = "Vous êtes un expert en stratégie de positionnement avec 15 ans d'expérience \
dans l'accompagnement de freelances. Vous excellez dans l'identification de niches rentables, \
la création de propositions de valeur uniques et l'optimisation de la visibilité professionnelle. \
Votre approche est pragmatique et orientée résultats.";

/// Role title of the finance agent
pub const FINANCE_ROLE_NAME: &str = "Expert en Fiscalité et Gestion Financière pour Freelances";

/// Goal of the finance agent
pub const FINANCE_GOAL: &str = "Aider le freelance à choisir le bon statut, anticiper les charges et simuler les revenus pour sécuriser son activité";

/// Backstory of the finance agent
pub const FINANCE_BACKSTORY: &str = "Vous êtes un conseiller expert en droit social et fiscalité des indépendants. \
Avec une expertise pointue des différents statuts juridiques français (micro-entreprise, SASU, EURL), \
vous aidez les freelances à optimiser leur situation fiscale et à sécuriser leur trésorerie. \
Vous êtes précis, pédagogue et toujours à jour des dernières réglementations.";

/// Role title of the marketing agent
pub const MARKETING_ROLE_NAME: &str = "Expert en Marketing Digital et Prospection B2B";

/// Goal of the marketing agent
pub const MARKETING_GOAL: &str = "Accompagner le freelance dans l'acquisition de visibilité et la recherche de clients";

/// Backstory of the marketing agent
pub const MARKETING_BACKSTORY: &str = "Vous êtes un spécialiste du marketing digital et de la prospection commerciale \
avec une expertise spécifique pour les freelances. Vous maîtrisez LinkedIn, l'email marketing, \
et les stratégies de contenu. Votre approche est systématique et orientée conversion, \
avec un focus sur l'acquisition de clients qualifiés.";

/// Marker the model uses to ask for a tool invocation
pub const TOOL_REQUEST_PREFIX: &str = "TOOL_REQUEST:";

/// Tool results longer than this are cut before being sent back to the model
pub const MAX_TOOL_OUTPUT_CHARS: usize = 8000;

/// Instructions appended to the system prompt when tools are available
pub const TOOL_USAGE_PROMPT: &str = "To use a tool, answer with a single line:\n\
TOOL_REQUEST: <tool_name> <arguments...>\n\
Only one tool request per response. Once you have enough information, answer the task directly without any tool request.";

/// Sent to the model once it has used all of its tool calls for the current work item
pub const TOOLS_EXHAUSTED_PROMPT: &str = "You cannot use tools anymore for this task. \
Give your final answer now, using the information you already have.";

/// Closing instruction of every work item prompt
pub const FINAL_ANSWER_PROMPT: &str = "Give your complete final answer. It must satisfy the expected output described above. \
Answer in French.";
