//! GROQ query definitions
//!
//! Each query dereferences tag and author references server-side so the
//! results map straight onto the typed records.

// ============================================================================
// GALLERY QUERIES
// ============================================================================

pub const ALL_APPS: &str = r#"
  *[_type == "galleryApp"] | order(_createdAt desc) {
    _id,
    _createdAt,
    title,
    "slug": slug.current,
    summary,
    previewImage {
      asset->{
        _id,
        url
      },
      alt
    },
    "useCase": useCase->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor,
      frameColor
    },
    "industries": industries[]->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    "technologies": technologies[]->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    githubUrl,
    "authors": authors[]->{
      name,
      linkedinUrl
    }
  }
"#;

pub const APP_BY_SLUG: &str = r#"
  *[_type == "galleryApp" && slug.current == $slug] {
    _id,
    _createdAt,
    title,
    "slug": slug.current,
    summary,
    description,
    previewImage {
      asset->{
        _id,
        url
      },
      alt
    },
    previewImages[] {
      asset->{
        _id,
        url
      },
      alt,
      caption
    },
    "useCase": useCase->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    "industries": industries[]->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    "technologies": technologies[]->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    githubUrl,
    "authors": authors[]->{
      name,
      linkedinUrl
    }
  }
"#;

pub const RELATED_CANDIDATES: &str = r#"
  *[_type == "galleryApp" && _id != $appId] | order(_createdAt desc) {
    _id,
    _createdAt,
    title,
    "slug": slug.current,
    summary,
    previewImage {
      asset->{
        _id,
        url
      },
      alt
    },
    "useCase": useCase->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    "industries": industries[]->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    "technologies": technologies[]->{
      name,
      "slug": slug.current,
      description,
      borderColor,
      darkBorderColor
    },
    githubUrl,
    "authors": authors[]->{
      name,
      linkedinUrl
    }
  }
"#;

// ============================================================================
// RESOURCE QUERIES
// ============================================================================

pub const ALL_RESOURCES: &str = r#"
  *[_type == "resource"] | order(date desc) {
    ...,
    "authors": authors[]->{ name, linkedinUrl },
    "category": category->title,
    "type": type->title
  }
"#;
