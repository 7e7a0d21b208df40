use polygen::{Result, Schema};

/// People, blogs, posts, tags and comments across two namespaces.
pub fn blogging() -> Result<Schema> {
    Schema::builder()
        .table("user", "Person")
        .column("SSN")
        .string()
        .max_length(9)
        .primary_key()
        .column("FirstName")
        .string()
        .primary_key()
        .max_length(100)
        .column("LastName")
        .string()
        .primary_key()
        .max_length(100)
        .column("Nickname")
        .string()
        .max_length(100)
        .nullable()
        .column("BirthDate")
        .date()
        .column("Age")
        .int32()
        .computed()
        .column("RowVersion")
        .row_version()
        .table("blogging", "Blog")
        .column("Id")
        .int32()
        .primary_key()
        .identity()
        .column("AuthorSSN")
        .string()
        .max_length(9)
        .column("AuthorFirstName")
        .string()
        .max_length(100)
        .column("AuthorLastName")
        .string()
        .max_length(100)
        .column("Title")
        .string()
        .max_length(200)
        .column("Description")
        .string()
        .max_length(500)
        .column("URL")
        .string()
        .max_length(1000)
        .column("Founded")
        .date()
        .table("blogging", "Post")
        .column("Id")
        .int32()
        .primary_key()
        .identity()
        .column("BlogId")
        .int32()
        .column("Title")
        .string()
        .max_length(200)
        .column("Summary")
        .string()
        .max_length(1000)
        .column("Content")
        .string()
        .max_length(100_000)
        .column("EditorSSN")
        .string()
        .max_length(9)
        .nullable()
        .column("EditorFirstName")
        .string()
        .max_length(100)
        .nullable()
        .column("EditorLastName")
        .string()
        .max_length(100)
        .nullable()
        .column("Rating")
        .byte()
        .table("blogging", "Tag")
        .column("Id")
        .int32()
        .primary_key()
        .identity()
        .column("Name")
        .string()
        .max_length(200)
        .column("Description")
        .string()
        .max_length(500)
        .table("blogging", "PostTag")
        .column("Id")
        .int32()
        .primary_key()
        .identity()
        .column("PostId")
        .int32()
        .column("TagId")
        .int32()
        .table("blogging", "Comment")
        .column("Id")
        .int32()
        .primary_key()
        .identity()
        .column("PostId")
        .int32()
        .column("AuthorSSN")
        .string()
        .max_length(9)
        .column("AuthorFirstName")
        .string()
        .max_length(100)
        .column("AuthorLastName")
        .string()
        .max_length(100)
        .column("Content")
        .string()
        .max_length(4000)
        .column("DateTime")
        .date_time()
        .relationship("FK_Author_Blogs")
        .from("blogging", "Blog")
        .to("user", "Person")
        .reference("AuthorSSN", "SSN")
        .reference("AuthorFirstName", "FirstName")
        .reference("AuthorLastName", "LastName")
        .on_delete_cascade()
        .relationship("FK_Blog_Posts")
        .from("blogging", "Post")
        .to("blogging", "Blog")
        .reference("BlogId", "Id")
        .relationship("FK_Post_Comments")
        .from("blogging", "Comment")
        .to("blogging", "Post")
        .reference("PostId", "Id")
        .relationship("FK_Comment_Author")
        .from("blogging", "Comment")
        .to("user", "Person")
        .reference("AuthorSSN", "SSN")
        .reference("AuthorFirstName", "FirstName")
        .reference("AuthorLastName", "LastName")
        .relationship("FK_Post_Editor")
        .from("blogging", "Post")
        .to("user", "Person")
        .reference("EditorSSN", "SSN")
        .reference("EditorFirstName", "FirstName")
        .reference("EditorLastName", "LastName")
        .on_delete_set_null()
        .relationship("FK_Post_PostTags")
        .from("blogging", "PostTag")
        .to("blogging", "Post")
        .reference("PostId", "Id")
        .relationship("FK_Tag_PostTags")
        .from("blogging", "PostTag")
        .to("blogging", "Tag")
        .reference("TagId", "Id")
        .build()
}
