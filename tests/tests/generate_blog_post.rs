use tests::*;

use pretty_assertions::assert_eq;

#[test]
fn source_has_two_entities_linked_by_a_navigation() {
    let source = blog_post().generate_code_as_string();

    let entities = source.matches("impl crate::support::Entity for ");
    assert_eq!(entities.count(), 2);
    assert!(source.contains("pub struct Blog {"));
    assert!(source.contains("pub struct Post {"));

    // Only Post navigates, to its Blog.
    assert_eq!(source.matches("pub fn set_").count(), 1);
    assert!(source.contains("pub fn set_blog(&mut self, value: crate::blogging::Blog)"));
    assert!(source.contains("\"FK_Blog_Posts\""));
}

#[test]
fn artifact_has_three_non_empty_images() {
    let artifact = blog_post().generate_code();

    assert!(artifact.success(), "{:#?}", artifact.diagnostics());
    assert_eq!(artifact.errors().count(), 0);

    for image in [
        &artifact.binary_image,
        &artifact.debug_image,
        &artifact.doc_image,
    ] {
        assert!(!image.as_ref().unwrap().is_empty());
    }
}

#[test]
fn images_describe_the_generated_crate() {
    let artifact = Generator::builder()
        .config(Config::new().crate_name("blog_data"))
        .build()
        .generate(&blog_post());

    let manifest = Manifest::decode(artifact.binary_image.as_ref().unwrap()).unwrap();
    assert_eq!(manifest.crate_name, "blog_data");

    let blogging = manifest.unit("blogging.rs").unwrap();
    assert_eq!(blogging.module, "blog_data::blogging");

    let structs: Vec<_> = blogging
        .items
        .iter()
        .filter(|item| item.kind == "struct")
        .map(|item| &item.path[..])
        .collect();
    assert_eq!(
        structs,
        [
            "blog_data::blogging::Blog",
            "blog_data::blogging::NewBlog",
            "blog_data::blogging::Post",
            "blog_data::blogging::NewPost",
        ]
    );

    let lines = LineTable::decode(artifact.debug_image.as_ref().unwrap()).unwrap();
    let post = lines.get("blog_data::blogging::Post").unwrap();
    assert_eq!(post.unit, "blogging.rs");
    let blog = lines.get("blog_data::blogging::Blog").unwrap();
    assert!(post.line > blog.line);

    let docs = DocIndex::decode(artifact.doc_image.as_ref().unwrap()).unwrap();
    assert_eq!(
        docs.get("blog_data::blogging::Post"),
        Some("Entity for table `blogging.Post`.")
    );
    assert_eq!(
        docs.get("blog_data::blogging"),
        Some("Entities of the `blogging` namespace.")
    );
}
