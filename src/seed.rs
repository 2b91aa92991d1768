//! Fixed starter catalog loaded into an empty store on first run.

use crate::models::AgeGroup;

/// One catalog entry as written into a fresh database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedBook {
    pub title: &'static str,
    pub author: &'static str,
    pub genre: &'static str,
    pub age_group: AgeGroup,
    pub description: Option<&'static str>,
    pub cover_url: Option<&'static str>,
    pub popularity: i64,
}

/// Inserted in this order, without deduplication.
pub const SEED_BOOKS: &[SeedBook] = &[
    SeedBook {
        title: "The Very Hungry Caterpillar",
        author: "Eric Carle",
        genre: "Children's Picture Book",
        age_group: AgeGroup::SmallKids,
        description: Some("A classic children's book that follows the journey of a caterpillar as it eats its way through various foods before transforming into a butterfly."),
        cover_url: Some("https://cdn.pixabay.com/photo/2020/04/21/14/06/butterfly-5073183_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "Where the Wild Things Are",
        author: "Maurice Sendak",
        genre: "Children's Picture Book",
        age_group: AgeGroup::SmallKids,
        description: Some("The story of Max, who sails to the land of the Wild Things, becomes their king, and then returns home to his very own room."),
        cover_url: Some("https://cdn.pixabay.com/photo/2019/12/12/11/40/picture-book-4691122_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "Goodnight Moon",
        author: "Margaret Wise Brown",
        genre: "Children's Picture Book",
        age_group: AgeGroup::SmallKids,
        description: Some("A classic bedtime story that describes a child saying goodnight to everything around."),
        cover_url: Some("https://cdn.pixabay.com/photo/2017/01/31/21/23/child-2027947_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "Harry Potter and the Sorcerer's Stone",
        author: "J.K. Rowling",
        genre: "Fantasy",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("The first novel in the Harry Potter series that introduces us to Harry, a young wizard who discovers his magical heritage as he makes close friends and few enemies in his first year at Hogwarts School."),
        cover_url: Some("https://cdn.pixabay.com/photo/2016/09/08/10/28/magic-1653450_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "To Kill a Mockingbird",
        author: "Harper Lee",
        genre: "Classic Literature",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A novel set in the American South during the 1930s, dealing with serious issues of racial inequality and moral growth as seen through the eyes of a young girl named Scout Finch."),
        cover_url: Some("https://cdn.pixabay.com/photo/2017/06/08/15/25/book-2384160_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "The Hobbit",
        author: "J.R.R. Tolkien",
        genre: "Fantasy",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A fantasy novel about the adventures of hobbit Bilbo Baggins, who embarks on a quest to win a share of the treasure guarded by dragon Smaug."),
        cover_url: Some("https://cdn.pixabay.com/photo/2017/08/01/00/38/fairy-tales-2562761_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "Pride and Prejudice",
        author: "Jane Austen",
        genre: "Classic Literature",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A romantic novel focusing on the emotional development of Elizabeth Bennet, who learns the error of making hasty judgments and comes to appreciate the difference between superficial goodness and actual goodness."),
        cover_url: Some("https://cdn.pixabay.com/photo/2015/11/19/21/14/glasses-1052023_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "The Giving Tree",
        author: "Shel Silverstein",
        genre: "Children's Fiction",
        age_group: AgeGroup::SmallKids,
        description: Some("A story about a relationship between a young boy and a tree in a forest. The tree and the boy become best friends, and the tree always provides the boy with what he needs."),
        cover_url: Some("https://cdn.pixabay.com/photo/2015/11/07/11/16/tree-1031192_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "1984",
        author: "George Orwell",
        genre: "Dystopian Fiction",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A dystopian novel set in Airstrip One, a province of the superstate Oceania in a world of perpetual war, omnipresent government surveillance, and public manipulation."),
        cover_url: Some("https://cdn.pixabay.com/photo/2017/06/29/07/31/eye-2453713_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "The Cat in the Hat",
        author: "Dr. Seuss",
        genre: "Children's Picture Book",
        age_group: AgeGroup::SmallKids,
        description: Some("A mischievous cat comes to entertain two children on a rainy day, causing chaos in their house in the process."),
        cover_url: Some("https://cdn.pixabay.com/photo/2017/07/24/02/10/cat-2533324_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "The Catcher in the Rye",
        author: "J.D. Salinger",
        genre: "Coming-of-Age Fiction",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("The story of Holden Caulfield, a teenage boy who has been expelled from prep school and is wandering around New York City, struggling with his own adolescence and alienation."),
        cover_url: Some("https://cdn.pixabay.com/photo/2019/03/09/09/02/rye-4044005_960_720.jpg"),
        popularity: 3,
    },
    SeedBook {
        title: "Charlotte's Web",
        author: "E.B. White",
        genre: "Children's Fiction",
        age_group: AgeGroup::SmallKids,
        description: Some("The story of a pig named Wilbur and his friendship with a barn spider named Charlotte, who saves Wilbur from being slaughtered."),
        cover_url: Some("https://cdn.pixabay.com/photo/2016/11/29/05/45/web-1867536_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "The Great Gatsby",
        author: "F. Scott Fitzgerald",
        genre: "Classic Literature",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("Set in the Jazz Age on Long Island, the novel depicts narrator Nick Carraway's interactions with mysterious millionaire Jay Gatsby and Gatsby's obsession to reunite with his former lover, Daisy Buchanan."),
        cover_url: Some("https://cdn.pixabay.com/photo/2018/07/01/20/01/lighthouse-3510595_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "The Gruffalo",
        author: "Julia Donaldson",
        genre: "Children's Picture Book",
        age_group: AgeGroup::SmallKids,
        description: Some("A story about a mouse taking a walk in a European forest, outwitting several threatening animals by claiming to have a meeting with a fearsome but fictional monster called The Gruffalo."),
        cover_url: Some("https://cdn.pixabay.com/photo/2016/09/10/17/18/book-1659717_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "The Alchemist",
        author: "Paulo Coelho",
        genre: "Fiction",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A novel about a young Andalusian shepherd who travels to the Egyptian pyramids in search of a treasure, only to find it at home."),
        cover_url: Some("https://cdn.pixabay.com/photo/2019/03/02/18/45/desert-4030571_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "Qatar: Politics and the Challenges of Development",
        author: "Matthew Gray",
        genre: "Non-Fiction",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("This book discusses Qatar's unique development story, examining how the nation has managed its economic and social progress."),
        cover_url: Some("https://cdn.pixabay.com/photo/2019/09/10/05/38/doha-4465671_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "The Pearl Qatar: A History",
        author: "Ahmed Al-Jaber",
        genre: "History",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("An exploration of the historic pearl industry in Qatar and how it shaped the nation's economy before the discovery of oil and gas."),
        cover_url: Some("https://cdn.pixabay.com/photo/2017/08/01/08/29/people-2563491_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "Al Khor: Stories from Qatar's Northern Coast",
        author: "Maryam Al-Thani",
        genre: "Local History",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A collection of historical accounts and personal stories from Al Khor, showcasing the rich heritage of this coastal community."),
        cover_url: Some("https://cdn.pixabay.com/photo/2020/01/20/18/50/coast-4781337_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "Desert Tales for Children",
        author: "Fatima Al-Kuwari",
        genre: "Children's Fiction",
        age_group: AgeGroup::SmallKids,
        description: Some("A beautifully illustrated collection of short stories set in Qatar's desert landscape, teaching children about local wildlife and traditions."),
        cover_url: Some("https://cdn.pixabay.com/photo/2016/11/23/15/32/wooden-floor-1853400_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "Islamic Architecture in Qatar",
        author: "Hassan Al-Qattan",
        genre: "Art & Architecture",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A comprehensive exploration of Qatar's architectural heritage, from traditional mosque designs to modern Islamic-inspired buildings."),
        cover_url: Some("https://cdn.pixabay.com/photo/2019/04/04/17/58/mosque-4103606_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "Voices of Migrant Workers in Qatar",
        author: "Aisha Al-Misnad",
        genre: "Cultural Studies",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("An insightful collection of interviews and stories from the diverse migrant workers who have contributed to Qatar's development."),
        cover_url: Some("https://cdn.pixabay.com/photo/2020/11/22/20/45/colorful-5767937_960_720.jpg"),
        popularity: 5,
    },
    SeedBook {
        title: "Inclusive Education: A Global Perspective",
        author: "Dr. Sarah Johnson & Dr. Mohammed Al-Thani",
        genre: "Education",
        age_group: AgeGroup::TeensAndAdults,
        description: Some("A collaborative work examining best practices in inclusive education across cultures, with case studies from Qatar and around the world."),
        cover_url: Some("https://cdn.pixabay.com/photo/2018/07/05/22/16/classroom-3519757_960_720.jpg"),
        popularity: 4,
    },
    SeedBook {
        title: "The Wheelchair Champion",
        author: "Youssef Abdullah",
        genre: "Children's Fiction",
        age_group: AgeGroup::SmallKids,
        description: Some("An inspiring story about a young Qatari boy who uses a wheelchair and becomes a champion in adaptive sports, teaching children about inclusion and determination."),
        cover_url: Some("https://cdn.pixabay.com/photo/2021/10/16/06/13/basketball-6714552_960_720.jpg"),
        popularity: 5,
    },
];
