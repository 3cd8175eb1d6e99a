use crate::constants::{DEFAULT_NAME, TURNOVER_RATIO};
use crate::crew::{Role, WorkItem};
use crate::profile::Profile;
use crate::utils::format_amount;

pub(super) fn build(profile: &Profile) -> Vec<WorkItem> {
    let role = Role::Finance;
    let income = format_amount(profile.target_income());
    let turnover = format_amount(profile.target_income() * TURNOVER_RATIO);

    vec![
        WorkItem::new(
            role,
            format!(
                "Pour le profil {} avec:\n\
                 - Objectif principal: {}\n\
                 - Revenu cible: {}€/mois\n\
                 Déterminer les questions clés à poser pour orienter le choix du statut juridique optimal.\n\
                 Adapter les conseils selon l'objectif (démarrage, croissance, spécialisation).",
                profile.name_or(DEFAULT_NAME),
                profile.objective(),
                income,
            ),
            "Liste de 5-7 questions essentielles pour le choix du statut",
        ),
        WorkItem::new(
            role,
            format!(
                "Comparer les statuts juridiques adaptés (micro-entreprise, SASU, EURL, portage salarial)\n\
                 pour un revenu cible de {}€/mois, soit un CA mensuel d'environ {}€.\n\
                 Inclure avantages, inconvénients, plafonds, régime fiscal et social.",
                income, turnover,
            ),
            "Tableau comparatif détaillé des statuts avec recommandation",
        ),
        WorkItem::new(
            role,
            format!(
                "Simuler les revenus nets, cotisations et impôts pour un CA mensuel de\n\
                 {}€ selon 3 scénarios:\n\
                 1. Micro-entreprise\n\
                 2. SASU avec dividendes\n\
                 3. EURL à l'IS",
                turnover,
            ),
            "Simulations chiffrées avec revenus nets après charges et impôts",
        ),
        WorkItem::new(
            role,
            "Générer un tableau de trésorerie prévisionnel sur 6 mois incluant:\n\
             - Entrées (CA prévisionnel avec progression)\n\
             - Sorties (charges fixes, variables, cotisations, impôts)\n\
             - Solde de trésorerie\n\
             - Besoins en fonds de roulement",
            "Tableau de trésorerie mois par mois sur 6 mois",
        ),
        WorkItem::new(
            role,
            "Créer un planning détaillé des démarches administratives pour créer son activité:\n\
             - Étapes dans l'ordre chronologique\n\
             - Documents nécessaires\n\
             - Délais moyens\n\
             - Coûts associés\n\
             - Organismes à contacter",
            "Checklist chronologique des démarches avec détails pratiques",
        ),
        WorkItem::new(
            role,
            "Établir un calendrier des obligations fiscales et sociales sur 12 mois:\n\
             - Dates de déclaration et paiement\n\
             - Cotisations sociales\n\
             - TVA si applicable\n\
             - Impôts\n\
             - CFE\n\
             Avec système d'alertes recommandé",
            "Calendrier annuel avec dates clés et montants estimés",
        ),
        WorkItem::new(
            role,
            "Identifier:\n\
             1. Les 5 principales aides disponibles pour les freelances débutants\n\
             2. Les 7 erreurs fiscales/administratives les plus courantes à éviter\n\
             3. Les 3 optimisations fiscales légales recommandées",
            "Guide pratique des aides, erreurs à éviter et optimisations",
        ),
    ]
}
