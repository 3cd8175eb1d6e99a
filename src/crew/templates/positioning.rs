use crate::constants::{DEFAULT_NAME, DEFAULT_NAME_BIO};
use crate::crew::{Role, WorkItem};
use crate::profile::Profile;

pub(super) fn build(profile: &Profile) -> Vec<WorkItem> {
    let role = Role::Positioning;

    vec![
        WorkItem::new(
            role,
            format!(
                "Analyser le profil suivant et identifier la niche la plus pertinente:\n\
                 - Nom: {}\n\
                 - Objectif: {}\n\
                 - Compétences: {}\n\
                 - Expérience: {}\n\
                 - Secteur: {}\n\
                 \n\
                 Adapter les recommandations selon l'objectif principal du freelance.\n\
                 Identifier une niche spécifique en croisant les compétences avec les tendances du marché actuel.\n\
                 Fournir une analyse de la demande et du potentiel de cette niche.",
                profile.name_or(DEFAULT_NAME),
                profile.objective(),
                profile.skills().join(", "),
                profile.experience(),
                profile.sector_or(""),
            ),
            "Niche identifiée avec justification basée sur les tendances marché et analyse de la demande",
        ),
        WorkItem::new(
            role,
            "Définir précisément le client idéal (persona) pour ce freelance.\n\
             Inclure: profil démographique, besoins principaux, pain points, budget type,\n\
             critères de décision, canaux de communication préférés.",
            "Persona client détaillé avec caractéristiques complètes",
        ),
        WorkItem::new(
            role,
            "Créer 3 versions d'un pitch percutant:\n\
             1. Version courte (1 ligne - elevator pitch)\n\
             2. Version moyenne (3-4 lignes - présentation LinkedIn)\n\
             3. Version longue (1 paragraphe - présentation détaillée)\n\
             \n\
             Le pitch doit être orienté bénéfices clients et différenciant.",
            "3 versions de pitch adaptées à différents contextes",
        ),
        WorkItem::new(
            role,
            format!(
                "Rédiger une bio LinkedIn optimisée pour {}.\n\
                 La bio doit:\n\
                 - Accrocher dès la première ligne\n\
                 - Mettre en avant la proposition de valeur unique\n\
                 - Inclure des mots-clés pertinents pour le SEO LinkedIn\n\
                 - Avoir un CTA clair\n\
                 - Faire maximum 2000 caractères",
                profile.name_or(DEFAULT_NAME_BIO),
            ),
            "Bio LinkedIn complète et optimisée SEO",
        ),
        WorkItem::new(
            role,
            "Transformer l'offre technique en une description de services orientée bénéfices clients.\n\
             Pour chaque service:\n\
             - Nom accrocheur\n\
             - Bénéfices concrets pour le client\n\
             - Résultats attendus\n\
             - Différenciateurs",
            "Description de 3-5 services principaux orientés bénéfices",
        ),
        WorkItem::new(
            role,
            "Réaliser une analyse rapide de 3 concurrents principaux.\n\
             Pour chaque concurrent identifier:\n\
             - Positionnement\n\
             - Points forts\n\
             - Points faibles\n\
             - Opportunités de différenciation",
            "Tableau comparatif avec opportunités de différenciation",
        ),
        WorkItem::new(
            role,
            "Simplifier et améliorer l'offre globale:\n\
             - Reformuler en langage orienté résultats (pas de jargon technique)\n\
             - Structurer en 3 packages/formules clairs\n\
             - Définir les garanties/engagements\n\
             - Proposer une offre d'appel",
            "Offre structurée en 3 formules avec pricing indicatif",
        ),
    ]
}
