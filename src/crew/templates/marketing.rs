use crate::constants::DEFAULT_SECTOR_CHANNELS;
use crate::crew::{Role, WorkItem};
use crate::profile::Profile;

pub(super) fn build(profile: &Profile) -> Vec<WorkItem> {
    let role = Role::Marketing;

    vec![
        WorkItem::new(
            role,
            format!(
                "Pour un freelance {} avec l'objectif \"{}\",\n\
                 identifier les 5 canaux de visibilité les plus pertinents (LinkedIn, Twitter, blog, newsletter, etc.)\n\
                 avec justification et priorité adaptées à cet objectif spécifique.",
                profile.sector_or(DEFAULT_SECTOR_CHANNELS),
                profile.objective(),
            ),
            "Liste priorisée des canaux avec stratégie pour chacun",
        ),
        WorkItem::new(
            role,
            "Créer un plan de contenu structuré sur 4 semaines incluant:\n\
             - Thématiques par semaine\n\
             - Types de contenu (article, vidéo, infographie, etc.)\n\
             - Fréquence de publication\n\
             - Objectifs par contenu (notoriété, engagement, conversion)",
            "Calendrier éditorial détaillé sur 4 semaines",
        ),
        WorkItem::new(
            role,
            "Rédiger 5 posts LinkedIn prêts à publier:\n\
             1. Post de présentation/positionnement\n\
             2. Post éducatif (partage d'expertise)\n\
             3. Post storytelling (retour d'expérience)\n\
             4. Post engagement (question à la communauté)\n\
             5. Post case study/résultats client\n\
             \n\
             Inclure émojis, hashtags et CTA adaptés.",
            "5 posts LinkedIn complets avec formatting et hashtags",
        ),
        WorkItem::new(
            role,
            "Créer 3 templates d'emails de prospection personnalisables:\n\
             1. Cold email première approche\n\
             2. Email de relance\n\
             3. Email de nurturing (partage de valeur)\n\
             \n\
             Plus 2 templates de messages LinkedIn (connexion et message).",
            "5 templates de messages prêts à personnaliser",
        ),
        WorkItem::new(
            role,
            "Organiser un système de suivi des prospects simple:\n\
             - Catégorisation des leads (chaud/tiède/froid)\n\
             - Pipeline de conversion en 5 étapes\n\
             - Indicateurs de suivi (taux d'ouverture, réponse, conversion)\n\
             - Outils recommandés (CRM simple, spreadsheet)",
            "Système de suivi structuré avec process et outils",
        ),
        WorkItem::new(
            role,
            "Créer une séquence de relances automatiques:\n\
             - Timeline des relances (J+3, J+7, J+14, J+30)\n\
             - Messages types pour chaque relance\n\
             - Critères d'arrêt\n\
             - Automatisation possible avec outils gratuits",
            "Séquence de relance complète avec messages et timing",
        ),
        WorkItem::new(
            role,
            "Définir les KPIs à suivre et le process d'optimisation:\n\
             - 5 métriques clés à tracker\n\
             - Fréquence d'analyse\n\
             - Process d'A/B testing\n\
             - Ajustements recommandés selon résultats\n\
             - Objectifs réalistes mois par mois",
            "Dashboard de KPIs et process d'amélioration continue",
        ),
    ]
}
