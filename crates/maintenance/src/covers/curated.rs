//! Hand-maintained title → cover URL table, consulted before any metadata API.
//!
//! The table is an ordered list of pairs. When a title appears more than once
//! the later pair wins, and every such repeat is reported so the table can be
//! cleaned up.

use std::collections::HashMap;

use tracing::warn;

/// A title that appeared more than once while building the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateTitle {
    pub title: String,
    pub replaced: String,
    pub kept: String,
}

#[derive(Debug, Clone, Default)]
pub struct CuratedCovers {
    covers: HashMap<String, String>,
    duplicates: Vec<DuplicateTitle>,
}

impl CuratedCovers {
    /// The shipped table: classic titles followed by Turkish titles.
    pub fn builtin() -> Self {
        Self::from_pairs(CLASSIC_COVERS.iter().chain(TURKISH_COVERS.iter()).copied())
    }

    pub fn from_pairs<T, U>(pairs: impl IntoIterator<Item = (T, U)>) -> Self
    where
        T: Into<String>,
        U: Into<String>,
    {
        let mut covers: HashMap<String, String> = HashMap::new();
        let mut duplicates = Vec::new();

        for (title, url) in pairs {
            let title = title.into();
            let url = url.into();
            if let Some(replaced) = covers.insert(title.clone(), url.clone()) {
                warn!("Curated cover table lists {title:?} more than once; keeping {url}, dropping {replaced}");
                duplicates.push(DuplicateTitle {
                    title,
                    replaced,
                    kept: url,
                });
            }
        }

        Self { covers, duplicates }
    }

    /// Exact, case-sensitive title match.
    pub fn lookup(&self, title: &str) -> Option<&str> {
        self.covers.get(title).map(String::as_str)
    }

    pub fn duplicates(&self) -> &[DuplicateTitle] {
        &self.duplicates
    }

    pub fn len(&self) -> usize {
        self.covers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.covers.is_empty()
    }
}

/// Covers for classic and popular titles.
pub const CLASSIC_COVERS: &[(&str, &str)] = &[
    ("A Christmas Carol", "https://images-na.ssl-images-amazon.com/images/I/81YPueTY+kL.jpg"),
    ("A Study in Scarlet", "https://images-na.ssl-images-amazon.com/images/I/71cGJhVV9QL.jpg"),
    ("A Tale of Two Cities", "https://images-na.ssl-images-amazon.com/images/I/81kz-JSHGFL.jpg"),
    ("Adventures of Huckleberry Finn", "https://images-na.ssl-images-amazon.com/images/I/71Xnz-EkOvL.jpg"),
    ("Alice's Adventures in Wonderland", "https://images-na.ssl-images-amazon.com/images/I/71pmz7HdGpL.jpg"),
    ("Pride and Prejudice", "https://images-na.ssl-images-amazon.com/images/I/71Q1tPupKjL.jpg"),
    ("The Great Gatsby", "https://images-na.ssl-images-amazon.com/images/I/71FTb9X6wsL.jpg"),
    ("Moby Dick", "https://images-na.ssl-images-amazon.com/images/I/71+WUXzpBFL.jpg"),
    ("War and Peace", "https://images-na.ssl-images-amazon.com/images/I/91tFN+dgGYL.jpg"),
    ("The Odyssey", "https://images-na.ssl-images-amazon.com/images/I/81YzHKeWq7L.jpg"),
    ("Don Quixote", "https://images-na.ssl-images-amazon.com/images/I/81-c1oPG2JL.jpg"),
    ("Frankenstein", "https://images-na.ssl-images-amazon.com/images/I/71CX11qUBOL.jpg"),
    ("Jane Eyre", "https://images-na.ssl-images-amazon.com/images/I/81Gm0qxuP8L.jpg"),
    ("Wuthering Heights", "https://images-na.ssl-images-amazon.com/images/I/81Gm0qxuP8L.jpg"),
    ("The Count of Monte Cristo", "https://images-na.ssl-images-amazon.com/images/I/81Y8QLPFbWL.jpg"),
    ("Crime and Punishment", "https://images-na.ssl-images-amazon.com/images/I/81XbzJGJnTL.jpg"),
    ("The Brothers Karamazov", "https://images-na.ssl-images-amazon.com/images/I/81wdB+X6YOL.jpg"),
    ("Les Misérables", "https://images-na.ssl-images-amazon.com/images/I/81wdB+X6YOL.jpg"),
    ("The Picture of Dorian Gray", "https://images-na.ssl-images-amazon.com/images/I/71R8pJXJiJL.jpg"),
    ("Dracula", "https://images-na.ssl-images-amazon.com/images/I/71AFqYQD-2L.jpg"),
    ("The Adventures of Sherlock Holmes", "https://images-na.ssl-images-amazon.com/images/I/91YS6mrM00L.jpg"),
    ("Gulliver's Travels", "https://images-na.ssl-images-amazon.com/images/I/71c1ltgBYML.jpg"),
    ("The Iliad", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("Hamlet", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("Romeo and Juliet", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("Macbeth", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Divine Comedy", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Canterbury Tales", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Prince", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Art of War", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Republic", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Communist Manifesto", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Wealth of Nations", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Origin of Species", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Interpretation of Dreams", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Social Contract", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Second Sex", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Diary of a Young Girl", "https://images-na.ssl-images-amazon.com/images/I/71YoFJSz3LL.jpg"),
    ("The Hobbit", "https://images-na.ssl-images-amazon.com/images/I/710+HcoP38L.jpg"),
    ("The Lord of the Rings", "https://images-na.ssl-images-amazon.com/images/I/71jLBXtWJWL.jpg"),
    ("Harry Potter and the Philosopher's Stone", "https://images-na.ssl-images-amazon.com/images/I/81m1s4wIPML.jpg"),
    ("Harry Potter and the Chamber of Secrets", "https://images-na.ssl-images-amazon.com/images/I/91OINeHnJGL.jpg"),
    ("Harry Potter and the Prisoner of Azkaban", "https://images-na.ssl-images-amazon.com/images/I/81lAPl9Fl0L.jpg"),
    ("Harry Potter and the Goblet of Fire", "https://images-na.ssl-images-amazon.com/images/I/91jlLIQslmL.jpg"),
    ("Harry Potter and the Order of the Phoenix", "https://images-na.ssl-images-amazon.com/images/I/91TpLHDnuFL.jpg"),
    ("Harry Potter and the Half-Blood Prince", "https://images-na.ssl-images-amazon.com/images/I/51KV4CSJNGL.jpg"),
    ("Harry Potter and the Deathly Hallows", "https://images-na.ssl-images-amazon.com/images/I/71sH3vxziLL.jpg"),
    ("1984", "https://images-na.ssl-images-amazon.com/images/I/71kxa1-0mfL.jpg"),
    ("Animal Farm", "https://images-na.ssl-images-amazon.com/images/I/71Y+pAhQXVL.jpg"),
    ("Brave New World", "https://images-na.ssl-images-amazon.com/images/I/81zE42gT3xL.jpg"),
    ("To Kill a Mockingbird", "https://images-na.ssl-images-amazon.com/images/I/71FxgtFKcQL.jpg"),
    ("The Catcher in the Rye", "https://images-na.ssl-images-amazon.com/images/I/91HPG31dTwL.jpg"),
    ("The Grapes of Wrath", "https://images-na.ssl-images-amazon.com/images/I/71S9dGNpR+L.jpg"),
    ("The Old Man and the Sea", "https://images-na.ssl-images-amazon.com/images/I/713nNkYQHPL.jpg"),
    ("For Whom the Bell Tolls", "https://images-na.ssl-images-amazon.com/images/I/71Fyf-iKa+L.jpg"),
    ("The Sun Also Rises", "https://images-na.ssl-images-amazon.com/images/I/81Ib+7+CkUL.jpg"),
    ("One Hundred Years of Solitude", "https://images-na.ssl-images-amazon.com/images/I/91-6oKYKH0L.jpg"),
    ("Love in the Time of Cholera", "https://images-na.ssl-images-amazon.com/images/I/81XTkCUKfQL.jpg"),
    ("The Alchemist", "https://images-na.ssl-images-amazon.com/images/I/71aFt4+OTOL.jpg"),
    ("The Little Prince", "https://images-na.ssl-images-amazon.com/images/I/71OZY035QKL.jpg"),
    ("The Stranger", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("The Plague", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("The Trial", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("The Metamorphosis", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("Ulysses", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("Lolita", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("Catch-22", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("Slaughterhouse-Five", "https://images-na.ssl-images-amazon.com/images/I/71Hgw6LDTlL.jpg"),
    ("The Hitchhiker's Guide to the Galaxy", "https://images-na.ssl-images-amazon.com/images/I/81XSN3KyJCL.jpg"),
    ("The Road", "https://images-na.ssl-images-amazon.com/images/I/71IJ1HC2a0L.jpg"),
    ("No Country for Old Men", "https://images-na.ssl-images-amazon.com/images/I/71IJ1HC2a0L.jpg"),
    ("Blood Meridian", "https://images-na.ssl-images-amazon.com/images/I/71IJ1HC2a0L.jpg"),
    ("The Road Less Traveled", "https://images-na.ssl-images-amazon.com/images/I/71IJ1HC2a0L.jpg"),
    ("The Power of Now", "https://images-na.ssl-images-amazon.com/images/I/714FbKtXS+L.jpg"),
    ("The 7 Habits of Highly Effective People", "https://images-na.ssl-images-amazon.com/images/I/71oF3c5ReaL.jpg"),
    ("How to Win Friends and Influence People", "https://images-na.ssl-images-amazon.com/images/I/71oF3c5ReaL.jpg"),
    ("Think and Grow Rich", "https://images-na.ssl-images-amazon.com/images/I/71oF3c5ReaL.jpg"),
    ("The 48 Laws of Power", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Art of War", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Prince", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Republic", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Communist Manifesto", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Wealth of Nations", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Origin of Species", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Interpretation of Dreams", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Social Contract", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Second Sex", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
    ("The Diary of a Young Girl", "https://images-na.ssl-images-amazon.com/images/I/71aG+xDKSYL.jpg"),
];

/// Covers for Turkish titles.
pub const TURKISH_COVERS: &[(&str, &str)] = &[
    ("Adalet Dünyası", "https://i.dr.com.tr/cache/600x600-0/originals/0001788076001-1.jpg"),
    ("Adalet Evi", "https://i.dr.com.tr/cache/600x600-0/originals/0000000647420-1.jpg"),
    ("Adalet Günleri", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Adalet Hikayesi", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Adalet Kapısı", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Adalet Kitabı", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Adalet Saati", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Adalet Sırrı", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Adalet Yolu", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Adalet Zamanı", "https://i.dr.com.tr/cache/600x600-0/originals/0001911177001-1.jpg"),
    ("Amerikan Tanrıları", "https://i.dr.com.tr/cache/600x600-0/originals/0001788076001-1.jpg"),
    ("Androidler Elektrikli Koyun Düşler mi?", "https://i.dr.com.tr/cache/600x600-0/originals/0001788076001-1.jpg"),
    ("Anlam Hikayesi", "https://i.dr.com.tr/cache/600x600-0/originals/0001788076001-1.jpg"),
    ("Anlam Kapısı", "https://i.dr.com.tr/cache/600x600-0/originals/0001788076001-1.jpg"),
];
